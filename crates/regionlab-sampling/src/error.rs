//! Error types for sampling and solving

use regionlab_domain::{DomainError, Point};
use thiserror::Error;

/// Errors that can occur while building grids or running propagations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid domain value (e.g. reversed interval)
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Strict-mode solver failure
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}

/// Failures reported by the solver in strict mode
///
/// Permissive mode never produces these; it returns the last iterate instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// A diagonal entry is exactly zero
    #[error("Zero diagonal entry in row {row}")]
    ZeroDiagonal {
        /// Row of the zero entry
        row: usize,
    },

    /// Iteration cap reached before the update fell below the tolerance
    #[error("No convergence after {iterations} iterations (last iterate {point})")]
    NotConverged {
        /// Iterations performed
        iterations: usize,
        /// Last iterate
        point: Point,
    },

    /// Iterate became NaN or infinite
    #[error("Non-finite iterate {point} after {iterations} iterations")]
    NonFinite {
        /// Iterations performed
        iterations: usize,
        /// Last iterate
        point: Point,
    },
}
