//! Error types for domain value construction

use thiserror::Error;

/// Errors raised while constructing domain values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Interval bounds are reversed or not finite
    #[error("Invalid interval [{from}, {to}]: bounds must be finite and lower must not exceed upper")]
    InvalidInterval {
        /// Requested lower bound
        from: f64,
        /// Requested upper bound
        to: f64,
    },

    /// A polygon needs at least three vertices
    #[error("Polygon needs at least 3 vertices, got {0}")]
    DegeneratePolygon(usize),
}
