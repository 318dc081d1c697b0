//! Interval module - scalar uncertainty and the interval-valued 2x2 system
//!
//! An [`Interval`] is a closed range `[from, to]`. Sampling code turns a
//! uniform variate `u ∈ [0, 1)` into a concrete value with [`Interval::at`];
//! the randomness itself lives outside this crate.

use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-valued 2x2 coefficient matrix, row-major
pub type Matrix2 = [[f64; 2]; 2];

/// Point-valued right-hand side of a 2x2 system
pub type Vector2 = [f64; 2];

/// Closed range `[from, to]` representing the uncertainty of one scalar
///
/// Serialized as a two-element array `[from, to]`; deserialization runs the
/// same validation as [`Interval::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Interval {
    from: f64,
    to: f64,
}

impl Interval {
    /// Create a new interval
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidInterval`] if `from > to` or either bound
    /// is not finite.
    pub fn new(from: f64, to: f64) -> Result<Self, DomainError> {
        if !(from.is_finite() && to.is_finite() && from <= to) {
            return Err(DomainError::InvalidInterval { from, to });
        }
        Ok(Self { from, to })
    }

    /// Degenerate interval holding exactly one value
    pub fn point(value: f64) -> Result<Self, DomainError> {
        Self::new(value, value)
    }

    /// Lower bound (`from`)
    pub fn lower(&self) -> f64 {
        self.from
    }

    /// Upper bound (`to`)
    pub fn upper(&self) -> f64 {
        self.to
    }

    /// Width of the interval, `|from - to|`
    pub fn width(&self) -> f64 {
        (self.from - self.to).abs()
    }

    /// Check if the interval contains a value
    pub fn contains(&self, value: f64) -> bool {
        value >= self.from && value <= self.to
    }

    /// Map a unit variate `u ∈ [0, 1)` onto the interval: `from + u * width`
    pub fn at(&self, u: f64) -> f64 {
        self.from + u * self.width()
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = DomainError;

    fn try_from([from, to]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(from, to)
    }
}

impl From<Interval> for [f64; 2] {
    fn from(interval: Interval) -> Self {
        [interval.from, interval.to]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}

/// Interval-valued 2x2 coefficient matrix, row-major
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalMatrix(pub [[Interval; 2]; 2]);

impl IntervalMatrix {
    /// Build a matrix from raw `[from, to]` pairs, validating every entry
    pub fn from_bounds(bounds: [[[f64; 2]; 2]; 2]) -> Result<Self, DomainError> {
        let [[a00, a01], [a10, a11]] = bounds;
        Ok(Self([
            [Interval::try_from(a00)?, Interval::try_from(a01)?],
            [Interval::try_from(a10)?, Interval::try_from(a11)?],
        ]))
    }

    /// The coefficient matrix `[[ [2,3], [-1,1] ], [ [-1,2], [2,3] ]]`
    pub fn reference() -> Self {
        Self([
            [Interval { from: 2.0, to: 3.0 }, Interval { from: -1.0, to: 1.0 }],
            [Interval { from: -1.0, to: 2.0 }, Interval { from: 2.0, to: 3.0 }],
        ])
    }

    /// Entry at `(row, col)`
    pub fn entry(&self, row: usize, col: usize) -> Interval {
        self.0[row][col]
    }
}

/// Interval-valued right-hand side of a 2x2 system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalVector(pub [Interval; 2]);

impl IntervalVector {
    /// Build a vector from raw `[from, to]` pairs, validating every entry
    pub fn from_bounds(bounds: [[f64; 2]; 2]) -> Result<Self, DomainError> {
        let [b0, b1] = bounds;
        Ok(Self([Interval::try_from(b0)?, Interval::try_from(b1)?]))
    }

    /// The right-hand side `[[-2,2], [-1,1]]`
    pub fn reference() -> Self {
        Self([Interval { from: -2.0, to: 2.0 }, Interval { from: -1.0, to: 1.0 }])
    }

    /// Entry at `index`
    pub fn entry(&self, index: usize) -> Interval {
        self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_creation() {
        let interval = Interval::new(2.0, 3.0).unwrap();
        assert_eq!(interval.lower(), 2.0);
        assert_eq!(interval.upper(), 3.0);
        assert_eq!(interval.width(), 1.0);
    }

    #[test]
    fn test_reversed_bounds_rejected() {
        let err = Interval::new(3.0, 2.0).unwrap_err();
        assert_eq!(err, DomainError::InvalidInterval { from: 3.0, to: 2.0 });
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        assert!(Interval::new(0.0, f64::INFINITY).is_err());

        let err = Interval::new(f64::NAN, 1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid interval [NaN, 1]: bounds must be finite and lower must not exceed upper"
        );
    }

    #[test]
    fn test_degenerate_interval() {
        let interval = Interval::point(4.0).unwrap();
        assert_eq!(interval.width(), 0.0);
        assert_eq!(interval.at(0.75), 4.0);
    }

    #[test]
    fn test_at_endpoints() {
        let interval = Interval::new(-1.0, 2.0).unwrap();
        assert_eq!(interval.at(0.0), -1.0);
        assert_eq!(interval.at(0.5), 0.5);
    }

    #[test]
    fn test_reference_system() {
        let a = IntervalMatrix::reference();
        assert_eq!(a.entry(0, 0), Interval::new(2.0, 3.0).unwrap());
        assert_eq!(a.entry(0, 1), Interval::new(-1.0, 1.0).unwrap());
        assert_eq!(a.entry(1, 0), Interval::new(-1.0, 2.0).unwrap());
        assert_eq!(a.entry(1, 1), Interval::new(2.0, 3.0).unwrap());

        let b = IntervalVector::reference();
        assert_eq!(b.entry(0), Interval::new(-2.0, 2.0).unwrap());
        assert_eq!(b.entry(1), Interval::new(-1.0, 1.0).unwrap());
    }

    #[test]
    fn test_from_bounds_validates_entries() {
        let result = IntervalMatrix::from_bounds([[[2.0, 3.0], [1.0, -1.0]], [[0.0, 0.0], [1.0, 2.0]]]);
        assert!(matches!(result, Err(DomainError::InvalidInterval { from, to }) if from == 1.0 && to == -1.0));
    }

    #[test]
    fn test_serde_array_form() {
        let json = serde_json::to_string(&IntervalVector::reference()).unwrap();
        assert_eq!(json, "[[-2.0,2.0],[-1.0,1.0]]");

        let parsed: IntervalMatrix =
            serde_json::from_str("[[[2,3],[-1,1]],[[-1,2],[2,3]]]").unwrap();
        assert_eq!(parsed, IntervalMatrix::reference());
    }

    #[test]
    fn test_serde_rejects_reversed_bounds() {
        let result: Result<Interval, _> = serde_json::from_str("[3.0, 2.0]");
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_matrix() {
        #[derive(Deserialize)]
        struct System {
            matrix: IntervalMatrix,
        }

        let system: System = toml::from_str("matrix = [[[2, 3], [-1, 1]], [[-1, 2], [2, 3]]]").unwrap();
        assert_eq!(system.matrix, IntervalMatrix::reference());
    }
}
