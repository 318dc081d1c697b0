//! Region module - piecewise membership across the four sign quadrants

use crate::predicate::{Predicate, QuadrantSystem};
use crate::Point;

/// Sign quadrant of the plane
///
/// Quadrants are closed, so points on an axis belong to two (the origin to
/// all four). [`Quadrant::of`] resolves those ties in the fixed order
/// First, Second, Third, Fourth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `x >= 0, y >= 0`
    First,
    /// `x <= 0, y >= 0`
    Second,
    /// `x <= 0, y <= 0`
    Third,
    /// `x >= 0, y <= 0`
    Fourth,
}

impl Quadrant {
    /// Quadrant responsible for `(x, y)`, or `None` when a coordinate is NaN
    pub fn of(x: f64, y: f64) -> Option<Self> {
        if x >= 0.0 && y >= 0.0 {
            Some(Quadrant::First)
        } else if x <= 0.0 && y >= 0.0 {
            Some(Quadrant::Second)
        } else if x <= 0.0 && y <= 0.0 {
            Some(Quadrant::Third)
        } else if x >= 0.0 && y <= 0.0 {
            Some(Quadrant::Fourth)
        } else {
            None
        }
    }

    /// Position of the quadrant's predicate in a classifier
    pub fn index(&self) -> usize {
        match self {
            Quadrant::First => 0,
            Quadrant::Second => 1,
            Quadrant::Third => 2,
            Quadrant::Fourth => 3,
        }
    }
}

/// Piecewise region: one predicate per quadrant
///
/// # Examples
///
/// ```
/// use regionlab_domain::RegionClassifier;
///
/// let region = RegionClassifier::reference();
/// assert!(region.classify(0.0, 0.0));
/// assert!(!region.classify(3.0, -3.0));
/// ```
pub struct RegionClassifier {
    predicates: [Box<dyn Predicate>; 4],
}

impl RegionClassifier {
    /// Create a classifier from predicates ordered First..Fourth
    pub fn new(predicates: [Box<dyn Predicate>; 4]) -> Self {
        Self { predicates }
    }

    /// Classifier over the four reference quadrant systems
    pub fn reference() -> Self {
        let [s1, s2, s3, s4] = QuadrantSystem::reference();
        Self::new([Box::new(s1), Box::new(s2), Box::new(s3), Box::new(s4)])
    }

    /// Predicate used for `quadrant`
    pub fn predicate(&self, quadrant: Quadrant) -> &dyn Predicate {
        self.predicates[quadrant.index()].as_ref()
    }

    /// Whether `(x, y)` lies in the region
    ///
    /// Only the predicate of the quadrant chosen by [`Quadrant::of`] is
    /// evaluated. Returns `false` when no quadrant applies.
    pub fn classify(&self, x: f64, y: f64) -> bool {
        match Quadrant::of(x, y) {
            Some(quadrant) => self.predicate(quadrant).holds(x, y),
            None => false,
        }
    }

    /// Whether `point` lies in the region
    pub fn contains(&self, point: Point) -> bool {
        self.classify(point.x, point.y)
    }
}

impl std::fmt::Debug for RegionClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionClassifier")
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

impl Predicate for RegionClassifier {
    fn holds(&self, x: f64, y: f64) -> bool {
        self.classify(x, y)
    }
}
