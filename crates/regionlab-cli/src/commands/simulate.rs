//! Simulate command implementation.

use super::propagate;
use crate::cli::SimulateArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use regionlab_sampling::SolverMode;

/// Execute the simulate command.
///
/// Table output prints the metrics summary; JSON and CSV print the points.
pub fn execute_simulate(args: SimulateArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut config = config.clone();
    if let Some(iterations) = args.iterations {
        config.monte_carlo.iterations = iterations;
    }
    if let Some(tolerance) = args.tolerance {
        config.solver.tolerance = tolerance;
    }
    if args.strict {
        config.solver.mode = SolverMode::Strict;
    }

    let propagation = propagate(&config)?;
    let metrics = &propagation.metrics;

    match formatter.format() {
        OutputFormat::Table => {
            println!("{}", formatter.format_metrics(metrics)?);
            if metrics.non_finite > 0 || metrics.capped > 0 {
                println!(
                    "{}",
                    formatter.warning(&format!(
                        "{} samples did not converge",
                        metrics.non_finite + metrics.capped
                    ))
                );
            }
        }
        OutputFormat::Json | OutputFormat::Csv => {
            println!("{}", formatter.format_points(&propagation.points)?);
        }
    }
    Ok(())
}
