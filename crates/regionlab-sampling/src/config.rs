//! Configuration for grid sampling, the solver and Monte Carlo runs
//!
//! Every constant of the reference workload is a default here rather than a
//! hard-coded value.

use crate::SamplingError;
use serde::{Deserialize, Serialize};

/// Default lower grid coordinate
pub const DEFAULT_GRID_FROM: f64 = -10.0;

/// Default upper grid coordinate
pub const DEFAULT_GRID_TO: f64 = 10.0;

/// Default grid resolution (steps per axis)
pub const DEFAULT_GRID_STEPS: usize = 1024;

/// Default Monte Carlo sample count
pub const DEFAULT_ITERATIONS: usize = 1_250_000;

/// Default solver tolerance
pub const DEFAULT_TOLERANCE: f64 = 1.0e-8;

/// Default solver iteration cap
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

/// Grid bounding box and resolution
///
/// # Examples
///
/// ```
/// use regionlab_sampling::GridConfig;
///
/// let config = GridConfig::default();
/// assert_eq!(config.steps, 1024);
///
/// let config = GridConfig::preview();
/// assert_eq!(config.steps, 128);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Lower coordinate on both axes
    pub from: f64,

    /// Upper coordinate on both axes
    pub to: f64,

    /// Number of steps per axis; the grid has `(steps + 1)^2` points
    pub steps: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            from: DEFAULT_GRID_FROM,
            to: DEFAULT_GRID_TO,
            steps: DEFAULT_GRID_STEPS,
        }
    }
}

impl GridConfig {
    /// Coarse grid for quick looks
    pub fn preview() -> Self {
        Self {
            steps: 128,
            ..Self::default()
        }
    }

    /// Check bounds and resolution
    pub fn validate(&self) -> Result<(), SamplingError> {
        if self.steps == 0 {
            return Err(SamplingError::Config("grid steps must be positive".into()));
        }
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(SamplingError::Config(format!(
                "grid bounds must be finite, got [{}, {}]",
                self.from, self.to
            )));
        }
        if self.from >= self.to {
            return Err(SamplingError::Config(format!(
                "grid lower bound {} must be below upper bound {}",
                self.from, self.to
            )));
        }
        Ok(())
    }
}

/// How the solver reports irregular results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverMode {
    /// Always return the last iterate, even if non-finite or not converged
    #[default]
    Permissive,
    /// Turn zero diagonals, non-convergence and non-finite iterates into errors
    Strict,
}

/// Jacobi solver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Stop once the max-norm of the update is at most this value
    pub tolerance: f64,

    /// Hard cap on iterations
    pub max_iterations: usize,

    /// Error reporting mode
    pub mode: SolverMode,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            mode: SolverMode::Permissive,
        }
    }
}

impl SolverConfig {
    /// Check tolerance and cap
    pub fn validate(&self) -> Result<(), SamplingError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(SamplingError::Config(format!(
                "solver tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(SamplingError::Config("solver max_iterations must be positive".into()));
        }
        Ok(())
    }
}

/// Monte Carlo run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloConfig {
    /// Number of sampled systems
    pub iterations: usize,

    /// Master seed; a fresh OS seed is drawn when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }
}

impl MonteCarloConfig {
    /// Small run for quick looks
    pub fn preview() -> Self {
        Self {
            iterations: 10_000,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let grid = GridConfig::default();
        assert_eq!(grid.from, -10.0);
        assert_eq!(grid.to, 10.0);
        assert_eq!(grid.steps, 1024);

        let solver = SolverConfig::default();
        assert_eq!(solver.tolerance, 1.0e-8);
        assert_eq!(solver.max_iterations, 1_000_000);
        assert_eq!(solver.mode, SolverMode::Permissive);

        let monte_carlo = MonteCarloConfig::default();
        assert_eq!(monte_carlo.iterations, 1_250_000);
        assert!(monte_carlo.seed.is_none());
    }

    #[test]
    fn test_preview_presets() {
        assert!(GridConfig::preview().steps < GridConfig::default().steps);
        assert!(MonteCarloConfig::preview().iterations < MonteCarloConfig::default().iterations);
    }

    #[test]
    fn test_grid_validation() {
        assert!(GridConfig::default().validate().is_ok());

        let zero_steps = GridConfig { steps: 0, ..GridConfig::default() };
        assert!(zero_steps.validate().is_err());

        let reversed = GridConfig { from: 1.0, to: -1.0, ..GridConfig::default() };
        assert!(reversed.validate().is_err());

        let infinite = GridConfig { to: f64::INFINITY, ..GridConfig::default() };
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn test_solver_validation() {
        assert!(SolverConfig::default().validate().is_ok());
        assert!(SolverConfig { tolerance: -1.0, ..SolverConfig::default() }.validate().is_err());
        assert!(SolverConfig { tolerance: f64::NAN, ..SolverConfig::default() }.validate().is_err());
        assert!(SolverConfig { max_iterations: 0, ..SolverConfig::default() }.validate().is_err());
    }

    #[test]
    fn test_partial_toml() {
        let solver: SolverConfig = toml::from_str("mode = \"strict\"").unwrap();
        assert_eq!(solver.mode, SolverMode::Strict);
        assert_eq!(solver.tolerance, DEFAULT_TOLERANCE);

        let monte_carlo: MonteCarloConfig = toml::from_str("iterations = 500\nseed = 7").unwrap();
        assert_eq!(monte_carlo.iterations, 500);
        assert_eq!(monte_carlo.seed, Some(7));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = GridConfig::preview();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: GridConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }
}
