//! Configuration management for the CLI.
//!
//! The file is looked up at `--config <path>` first, then at
//! `~/.regionlab/config.toml`; missing sections fall back to defaults.

use crate::error::{CliError, Result};
use regionlab_domain::{IntervalMatrix, IntervalVector};
use regionlab_sampling::{GridConfig, MonteCarloConfig, SolverConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Region grid
    #[serde(default)]
    pub grid: GridConfig,

    /// Monte Carlo run
    #[serde(default)]
    pub monte_carlo: MonteCarloConfig,

    /// Jacobi solver
    #[serde(default)]
    pub solver: SolverConfig,

    /// Interval-valued system to propagate
    #[serde(default)]
    pub system: SystemConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Interval coefficients and right-hand side, as `[from, to]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Coefficient matrix, row-major
    pub matrix: IntervalMatrix,

    /// Right-hand side
    pub vector: IntervalVector,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Use the rayon thread pool for grid filtering and propagation
    #[serde(default = "default_true")]
    pub parallel: bool,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Comma-separated values
    Csv,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".regionlab").join("config.toml"))
    }

    /// Load configuration from `path`, or from the default path if present.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    tracing::debug!("No config file at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate configuration from a file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check the grid and solver sections.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.solver.validate()?;
        Ok(())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            matrix: IntervalMatrix::reference(),
            vector: IntervalVector::reference(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            parallel: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use regionlab_sampling::SolverMode;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.grid.steps, 1024);
        assert_eq!(config.monte_carlo.iterations, 1_250_000);
        assert_eq!(config.system.matrix, IntervalMatrix::reference());
        assert!(config.settings.color);
        assert!(config.settings.parallel);
        assert_eq!(config.settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.grid.steps = 64;
        config.monte_carlo.seed = Some(99);
        config.solver.mode = SolverMode::Strict;
        config.settings.format = OutputFormat::Csv;
        config.save_to(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[grid]\nsteps = 32\n\n[settings]\ncolor = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.grid.steps, 32);
        assert_eq!(config.grid.from, -10.0);
        assert!(!config.settings.color);
        assert!(config.settings.parallel);
        assert_eq!(config.system, SystemConfig::default());
    }

    #[test]
    fn test_system_section() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[system]\nmatrix = [[[1.0, 1.0], [0.0, 0.0]], [[0.0, 0.0], [1.0, 2.0]]]\nvector = [[5.0, 5.0], [7.0, 8.0]]\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.system.matrix.entry(1, 1).upper(), 2.0);
        assert_eq!(config.system.vector.entry(1).lower(), 7.0);
    }

    #[test]
    fn test_reversed_interval_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[system]\nmatrix = [[[3.0, 2.0], [0.0, 0.0]], [[0.0, 0.0], [1.0, 1.0]]]\nvector = [[0.0, 0.0], [0.0, 0.0]]\n",
        )
        .unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(CliError::Toml(_))));
    }

    #[test]
    fn test_invalid_grid_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[grid]\nsteps = 0\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_missing_explicit_path() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
