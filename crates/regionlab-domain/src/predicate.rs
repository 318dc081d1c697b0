//! Predicate module - linear inequality systems describing the feasible region
//!
//! Each sign quadrant of the plane carries its own system of four linear
//! bounds. A bound is stored in the exact arithmetic shape it is evaluated
//! in, `subject REL (coefficient * other + offset) / divisor`, so that
//! boundary points are decided by plain IEEE-754 comparisons without any
//! tolerance.

use std::fmt;

/// A pure membership test over the plane
///
/// Implemented by [`QuadrantSystem`] and by any `Fn(f64, f64) -> bool`
/// closure, so ad hoc regions can be classified without a new type.
pub trait Predicate: Send + Sync {
    /// Whether `(x, y)` satisfies the predicate
    fn holds(&self, x: f64, y: f64) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(f64, f64) -> bool + Send + Sync,
{
    fn holds(&self, x: f64, y: f64) -> bool {
        self(x, y)
    }
}

/// Variable a bound constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// First coordinate (x)
    X1,
    /// Second coordinate (y)
    X2,
}

/// Comparison of a bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `subject >= rhs`
    AtLeast,
    /// `subject <= rhs`
    AtMost,
}

/// One non-strict linear inequality
/// `subject REL (coefficient * other + offset) / divisor`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearBound {
    /// Constrained variable
    pub subject: Axis,
    /// Comparison direction
    pub relation: Relation,
    /// Coefficient of the other variable
    pub coefficient: f64,
    /// Constant term
    pub offset: f64,
    /// Divisor applied to the whole right-hand side
    pub divisor: f64,
}

impl LinearBound {
    /// `subject >= coefficient * other + offset`
    pub const fn at_least(subject: Axis, coefficient: f64, offset: f64) -> Self {
        Self {
            subject,
            relation: Relation::AtLeast,
            coefficient,
            offset,
            divisor: 1.0,
        }
    }

    /// `subject <= coefficient * other + offset`
    pub const fn at_most(subject: Axis, coefficient: f64, offset: f64) -> Self {
        Self {
            subject,
            relation: Relation::AtMost,
            coefficient,
            offset,
            divisor: 1.0,
        }
    }

    /// Divide the right-hand side by `divisor`
    pub const fn over(mut self, divisor: f64) -> Self {
        self.divisor = divisor;
        self
    }

    /// Evaluate the bound at `(x, y)`
    pub fn holds(&self, x: f64, y: f64) -> bool {
        let (subject, other) = match self.subject {
            Axis::X1 => (x, y),
            Axis::X2 => (y, x),
        };
        let rhs = (self.coefficient * other + self.offset) / self.divisor;

        match self.relation {
            Relation::AtLeast => subject >= rhs,
            Relation::AtMost => subject <= rhs,
        }
    }
}

impl fmt::Display for LinearBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (subject, other) = match self.subject {
            Axis::X1 => ("x1", "x2"),
            Axis::X2 => ("x2", "x1"),
        };
        let op = match self.relation {
            Relation::AtLeast => ">=",
            Relation::AtMost => "<=",
        };
        if self.divisor == 1.0 {
            write!(f, "{} {} {}*{} + {}", subject, op, self.coefficient, other, self.offset)
        } else {
            write!(
                f,
                "{} {} ({}*{} + {}) / {}",
                subject, op, self.coefficient, other, self.offset, self.divisor
            )
        }
    }
}

/// Conjunction of linear bounds valid inside one sign quadrant
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrantSystem {
    bounds: Vec<LinearBound>,
}

impl QuadrantSystem {
    /// Create a system from its bounds
    pub fn new(bounds: Vec<LinearBound>) -> Self {
        Self { bounds }
    }

    /// System for `x1 >= 0, x2 >= 0`
    pub fn first() -> Self {
        use Axis::{X1, X2};
        Self::new(vec![
            LinearBound::at_least(X2, 2.0, -2.0),
            LinearBound::at_least(X2, -3.0, -2.0),
            LinearBound::at_least(X1, 2.0, -1.0),
            LinearBound::at_least(X1, -3.0, -1.0).over(2.0),
        ])
    }

    /// System for `x1 <= 0, x2 >= 0`
    pub fn second() -> Self {
        use Axis::{X1, X2};
        Self::new(vec![
            LinearBound::at_least(X2, -2.0, -2.0),
            LinearBound::at_least(X2, 3.0, -2.0),
            LinearBound::at_most(X1, -2.0, 1.0),
            LinearBound::at_most(X1, 3.0, 1.0).over(2.0),
        ])
    }

    /// System for `x1 <= 0, x2 <= 0`
    pub fn third() -> Self {
        use Axis::{X1, X2};
        Self::new(vec![
            LinearBound::at_most(X2, 2.0, 2.0),
            LinearBound::at_most(X2, -3.0, 2.0),
            LinearBound::at_most(X1, 2.0, 1.0),
            LinearBound::at_most(X1, -3.0, 1.0).over(2.0),
        ])
    }

    /// System for `x1 >= 0, x2 <= 0`
    pub fn fourth() -> Self {
        use Axis::{X1, X2};
        Self::new(vec![
            LinearBound::at_most(X2, -2.0, 2.0),
            LinearBound::at_most(X2, 3.0, 2.0),
            LinearBound::at_least(X1, -2.0, -1.0),
            LinearBound::at_least(X1, 3.0, -1.0).over(2.0),
        ])
    }

    /// The four reference systems in quadrant order
    pub fn reference() -> [Self; 4] {
        [Self::first(), Self::second(), Self::third(), Self::fourth()]
    }

    /// Bounds violated at `(x, y)`
    pub fn violations(&self, x: f64, y: f64) -> impl Iterator<Item = &LinearBound> + '_ {
        self.bounds.iter().filter(move |bound| !bound.holds(x, y))
    }
}

impl Predicate for QuadrantSystem {
    fn holds(&self, x: f64, y: f64) -> bool {
        self.violations(x, y).next().is_none()
    }
}
