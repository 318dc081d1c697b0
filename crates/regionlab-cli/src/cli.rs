//! CLI command definitions and argument parsing.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// regionlab - Sample a piecewise-linear feasible region and propagate
/// interval uncertainty through a 2x2 Jacobi solver.
#[derive(Debug, Parser)]
#[command(name = "regionlab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "REGIONLAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Master seed for Monte Carlo runs
    #[arg(long, global = true, env = "REGIONLAB_SEED")]
    pub seed: Option<u64>,

    /// Run on the current thread only
    #[arg(long, global = true)]
    pub sequential: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Log level implied by `-v` when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Load the configuration, apply the global flags on top of it and
    /// build the matching formatter.
    ///
    /// `config init` starts from the defaults so that a broken file can be
    /// replaced.
    pub fn resolve(&self) -> Result<(Config, Formatter)> {
        let mut config = match &self.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { .. },
            }) => Config::default(),
            _ => Config::load(self.config.as_deref())?,
        };

        if self.seed.is_some() {
            config.monte_carlo.seed = self.seed;
        }
        if self.sequential {
            config.settings.parallel = false;
        }

        let format = self.format.map(Into::into).unwrap_or(config.settings.format);
        let color_enabled = !self.no_color && config.settings.color;
        Ok((config, Formatter::new(format, color_enabled)))
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Comma-separated values
    Csv,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the grid points inside the feasible region
    Region(RegionArgs),

    /// Run the Monte Carlo propagation
    Simulate(SimulateArgs),

    /// Solve one point-valued system
    Solve(SolveArgs),

    /// Export region, Monte Carlo points and reference polygon as JSON
    Scene(SceneArgs),

    /// Print the raw grid row by row
    Grid(GridArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Grid overrides shared by several commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GridOverrides {
    /// Steps per axis
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    /// Lower coordinate on both axes
    #[arg(long, allow_hyphen_values = true)]
    pub from: Option<f64>,

    /// Upper coordinate on both axes
    #[arg(long, allow_hyphen_values = true)]
    pub to: Option<f64>,
}

/// Arguments for the region command.
#[derive(Debug, Parser)]
pub struct RegionArgs {
    #[command(flatten)]
    pub grid: GridOverrides,
}

/// Arguments for the simulate command.
#[derive(Debug, Parser)]
pub struct SimulateArgs {
    /// Number of sampled systems
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Solver tolerance
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Fail on the first sample that does not converge
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the solve command.
#[derive(Debug, Parser)]
pub struct SolveArgs {
    /// Coefficients a00,a01,a10,a11
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub matrix: Vec<f64>,

    /// Right-hand side b0,b1
    #[arg(short = 'b', long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub vector: Vec<f64>,

    /// Solver tolerance
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Iteration cap
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Reject zero diagonals and non-converged results
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the scene command.
#[derive(Debug, Parser)]
pub struct SceneArgs {
    /// Write the scene to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub grid: GridOverrides,

    /// Number of sampled systems
    #[arg(short, long)]
    pub iterations: Option<usize>,
}

/// Arguments for the grid command.
#[derive(Debug, Parser)]
pub struct GridArgs {
    /// Steps per axis
    #[arg(short = 'n', long, default_value = "8")]
    pub steps: usize,

    /// Lower coordinate on both axes
    #[arg(long, allow_hyphen_values = true)]
    pub from: Option<f64>,

    /// Upper coordinate on both axes
    #[arg(long, allow_hyphen_values = true)]
    pub to: Option<f64>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Csv => crate::config::OutputFormat::Csv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> String {
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_region_command() {
        let cli = Cli::parse_from(["regionlab", "region", "--steps", "64", "--from", "-5", "--to", "5"]);
        match cli.command {
            Command::Region(args) => {
                assert_eq!(args.grid.steps, Some(64));
                assert_eq!(args.grid.from, Some(-5.0));
                assert_eq!(args.grid.to, Some(5.0));
            }
            _ => panic!("Expected Region command"),
        }
    }

    #[test]
    fn test_solve_command() {
        let cli = Cli::parse_from([
            "regionlab",
            "solve",
            "--matrix",
            "2,-1,1,2",
            "--vector",
            "-3,3",
            "--strict",
        ]);
        match cli.command {
            Command::Solve(args) => {
                assert_eq!(args.matrix, vec![2.0, -1.0, 1.0, 2.0]);
                assert_eq!(args.vector, vec![-3.0, 3.0]);
                assert!(args.strict);
            }
            _ => panic!("Expected Solve command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "regionlab",
            "simulate",
            "-vv",
            "--seed",
            "7",
            "--sequential",
            "--format",
            "csv",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_level(), "debug");
        assert_eq!(cli.seed, Some(7));
        assert!(cli.sequential);
        assert!(matches!(cli.format, Some(CliFormat::Csv)));
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["regionlab", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force: true }
            })
        ));
    }

    #[test]
    fn test_flags_override_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[monte_carlo]\nseed = 1\n\n[settings]\nformat = \"csv\"\nparallel = true\n",
        );

        let cli = Cli::parse_from(["regionlab", "--config", &path, "region"]);
        let (config, formatter) = cli.resolve().unwrap();
        assert_eq!(config.monte_carlo.seed, Some(1));
        assert!(config.settings.parallel);
        assert_eq!(formatter.format(), OutputFormat::Csv);

        let cli = Cli::parse_from([
            "regionlab",
            "--config",
            &path,
            "--seed",
            "7",
            "--sequential",
            "--format",
            "json",
            "--no-color",
            "region",
        ]);
        let (config, formatter) = cli.resolve().unwrap();
        assert_eq!(config.monte_carlo.seed, Some(7));
        assert!(!config.settings.parallel);
        assert_eq!(formatter.format(), OutputFormat::Json);
        assert_eq!(formatter.success("done"), "✓ done");
    }

    #[test]
    fn test_config_init_ignores_broken_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[grid\nsteps = ");

        let cli = Cli::parse_from(["regionlab", "--config", &path, "config", "init", "--force"]);
        let (config, formatter) = cli.resolve().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(formatter.format(), OutputFormat::Table);

        let cli = Cli::parse_from(["regionlab", "--config", &path, "region"]);
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Json.into();
        assert_eq!(format, crate::config::OutputFormat::Json);
    }
}
