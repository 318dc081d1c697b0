//! Command implementations.

pub mod config;
pub mod grid;
pub mod region;
pub mod scene;
pub mod simulate;
pub mod solve;

pub use self::config::execute_config;
pub use self::grid::execute_grid;
pub use self::region::execute_region;
pub use self::scene::execute_scene;
pub use self::simulate::execute_simulate;
pub use self::solve::execute_solve;

use crate::cli::GridOverrides;
use crate::config::Config;
use crate::error::Result;
use regionlab_domain::{Point, RegionClassifier};
use regionlab_sampling::sampler::seeded_rng;
use regionlab_sampling::{
    filter_by_region, par_filter_by_region, random_seed, GridConfig, GridSampler, JacobiSolver,
    MonteCarloPropagator, Propagation,
};

/// Grid configuration with command-line overrides applied.
fn grid_config(config: &Config, overrides: &GridOverrides) -> GridConfig {
    GridConfig {
        from: overrides.from.unwrap_or(config.grid.from),
        to: overrides.to.unwrap_or(config.grid.to),
        steps: overrides.steps.unwrap_or(config.grid.steps),
    }
}

/// Grid points accepted by the reference classifier.
fn region_points(grid: &GridConfig, parallel: bool) -> Result<Vec<Point>> {
    let grid = GridSampler::from_config(grid)?.sample();
    let classifier = RegionClassifier::reference();
    Ok(if parallel {
        par_filter_by_region(&grid, &classifier)
    } else {
        filter_by_region(&grid, &classifier)
    })
}

/// Monte Carlo run over the configured system.
fn propagate(config: &Config) -> Result<Propagation> {
    config.solver.validate()?;
    let propagator = MonteCarloPropagator::new(
        config.system.matrix,
        config.system.vector,
        JacobiSolver::from_config(&config.solver),
    );

    let seed = config.monte_carlo.seed.unwrap_or_else(random_seed);
    tracing::info!("Monte Carlo seed: {}", seed);

    let iterations = config.monte_carlo.iterations;
    let propagation = if config.settings.parallel {
        propagator.run_parallel(iterations, seed)?
    } else {
        propagator.run(iterations, &mut seeded_rng(seed))?
    };
    Ok(propagation)
}
