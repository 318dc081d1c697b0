//! Solve command implementation.

use crate::cli::SolveArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use regionlab_domain::{Matrix2, Vector2};
use regionlab_sampling::{JacobiSolver, SolveOutcome, SolverMode};

/// Execute the solve command.
pub fn execute_solve(args: SolveArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let (a, b) = parse_system(&args.matrix, &args.vector)?;

    let mut solver_config = config.solver.clone();
    if let Some(tolerance) = args.tolerance {
        solver_config.tolerance = tolerance;
    }
    if let Some(max_iterations) = args.max_iterations {
        solver_config.max_iterations = max_iterations;
    }
    if args.strict {
        solver_config.mode = SolverMode::Strict;
    }
    solver_config.validate()?;

    let solver = JacobiSolver::from_config(&solver_config);
    let outcome = match solver.mode() {
        SolverMode::Strict => {
            let (point, iterations) = solver.solve_strict(&a, &b)?;
            SolveOutcome::Converged { point, iterations }
        }
        SolverMode::Permissive => solver.solve(&a, &b),
    };
    tracing::debug!("Solved {:?} x = {:?}: {:?}", a, b, outcome);

    println!("{}", formatter.format_outcome(&outcome)?);
    Ok(())
}

/// Build a system from flat `a00,a01,a10,a11` and `b0,b1` lists.
pub fn parse_system(matrix: &[f64], vector: &[f64]) -> Result<(Matrix2, Vector2)> {
    let [a00, a01, a10, a11] = <[f64; 4]>::try_from(matrix).map_err(|_| {
        CliError::InvalidInput(format!("--matrix expects 4 values, got {}", matrix.len()))
    })?;
    let b = <[f64; 2]>::try_from(vector).map_err(|_| {
        CliError::InvalidInput(format!("--vector expects 2 values, got {}", vector.len()))
    })?;
    Ok(([[a00, a01], [a10, a11]], b))
}
