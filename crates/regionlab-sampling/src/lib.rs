//! regionlab Sampling
//!
//! Grid sampling of the feasible region and Monte Carlo propagation of
//! interval uncertainty through a Jacobi solver.
//!
//! # Overview
//!
//! - **Grid sampling**: [`GridSampler`] lays a uniform grid over a square box;
//!   [`filter_by_region`] keeps the points a [`RegionClassifier`] accepts
//! - **Solving**: [`JacobiSolver`] runs fixed-point iteration on one
//!   point-valued 2x2 system and reports a [`SolveOutcome`]
//! - **Propagation**: [`MonteCarloPropagator`] samples concrete systems from
//!   interval coefficients, solves each one and collects the points
//! - **Metrics**: [`PropagationMetrics`] summarizes solver outcomes and the
//!   spread of the solutions
//!
//! # Usage
//!
//! ```
//! use regionlab_domain::RegionClassifier;
//! use regionlab_sampling::{filter_by_region, GridSampler, MonteCarloPropagator};
//!
//! # fn main() -> Result<(), regionlab_sampling::SamplingError> {
//! let grid = GridSampler::new(-10.0, 10.0, 64)?.sample();
//! let region = filter_by_region(&grid, &RegionClassifier::reference());
//! assert!(!region.is_empty());
//!
//! let run = MonteCarloPropagator::reference().run_parallel(1_000, 42)?;
//! assert_eq!(run.points.len(), 1_000);
//! println!("{}", run.metrics.summary());
//! # Ok(())
//! # }
//! ```
//!
//! [`RegionClassifier`]: regionlab_domain::RegionClassifier

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod grid;
pub mod metrics;
pub mod propagator;
pub mod sampler;
pub mod solver;

pub use config::{GridConfig, MonteCarloConfig, SolverConfig, SolverMode};
pub use error::{SamplingError, SolverError};
pub use grid::{filter_by_region, par_filter_by_region, Grid, GridSampler};
pub use metrics::{Bounds, PropagationMetrics};
pub use propagator::{MonteCarloPropagator, Propagation, CHUNK_SIZE};
pub use sampler::{derive_seed, random_seed, sample_interval, sample_system};
pub use solver::{JacobiSolver, SolveOutcome};
