//! Error types for the CLI application.

use regionlab_domain::DomainError;
use regionlab_sampling::{SamplingError, SolverError};
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Sampling or propagation error
    #[error("{0}")]
    Sampling(#[from] SamplingError),

    /// Invalid domain value
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<SolverError> for CliError {
    fn from(err: SolverError) -> Self {
        CliError::Sampling(SamplingError::Solver(err))
    }
}
