//! Monte Carlo propagation of interval uncertainty through the solver
//!
//! Every sample draws a concrete system from the interval-valued
//! coefficients, solves it and keeps the resulting point. Sequential runs
//! thread one generator through all draws. Parallel runs split the work into
//! chunks of [`CHUNK_SIZE`] samples. Chunk `k` owns a generator seeded with
//! `derive_seed(master, k)`, so the output does not depend on the number of
//! rayon threads.

use crate::config::DEFAULT_MAX_ITERATIONS;
use crate::sampler::{sample_system, seeded_rng, stream_rng};
use crate::{JacobiSolver, PropagationMetrics, SamplingError, SolveOutcome, SolverError};
use rand::Rng;
use rayon::prelude::*;
use regionlab_domain::{IntervalMatrix, IntervalVector, Point, Polygon};
use std::time::Instant;

/// Samples per parallel chunk
pub const CHUNK_SIZE: usize = 16_384;

/// Points and metrics of one propagation run
#[derive(Debug, Clone)]
pub struct Propagation {
    /// Solutions in sample order
    pub points: Vec<Point>,
    /// Run statistics
    pub metrics: PropagationMetrics,
}

/// Propagates an interval-valued system through a [`JacobiSolver`]
///
/// # Examples
///
/// ```
/// use regionlab_sampling::MonteCarloPropagator;
///
/// let propagator = MonteCarloPropagator::reference();
/// let points = propagator.propagate_seeded(100, 42);
/// assert_eq!(points.len(), 100);
/// assert_eq!(points, propagator.propagate_seeded(100, 42));
/// ```
#[derive(Debug, Clone)]
pub struct MonteCarloPropagator {
    matrix: IntervalMatrix,
    vector: IntervalVector,
    solver: JacobiSolver,
    hull: Polygon,
}

impl MonteCarloPropagator {
    /// Create a propagator; metrics count points inside [`Polygon::reference`]
    pub fn new(matrix: IntervalMatrix, vector: IntervalVector, solver: JacobiSolver) -> Self {
        Self {
            matrix,
            vector,
            solver,
            hull: Polygon::reference(),
        }
    }

    /// The reference system with the default solver
    pub fn reference() -> Self {
        Self::new(
            IntervalMatrix::reference(),
            IntervalVector::reference(),
            JacobiSolver::default(),
        )
    }

    /// Draw and solve one system
    fn solve_sample<R: Rng>(&self, rng: &mut R) -> SolveOutcome {
        let (a, b) = sample_system(&self.matrix, &self.vector, rng);
        self.solver.solve(&a, &b)
    }

    /// Draw and solve one system, honouring the solver mode
    fn solve_sample_checked<R: Rng>(&self, rng: &mut R) -> Result<SolveOutcome, SolverError> {
        let (a, b) = sample_system(&self.matrix, &self.vector, rng);
        self.solver.solve_checked(&a, &b)
    }

    /// Solve `iterations` samples drawn from `rng`
    ///
    /// Always permissive: every sample yields a point, finite or not.
    pub fn propagate<R: Rng>(&self, iterations: usize, rng: &mut R) -> Vec<Point> {
        (0..iterations).map(|_| self.solve_sample(rng).point()).collect()
    }

    /// [`propagate`](Self::propagate) with a generator seeded from `seed`
    pub fn propagate_seeded(&self, iterations: usize, seed: u64) -> Vec<Point> {
        self.propagate(iterations, &mut seeded_rng(seed))
    }

    /// Chunked parallel [`propagate`](Self::propagate)
    pub fn propagate_parallel(&self, iterations: usize, master_seed: u64) -> Vec<Point> {
        let chunks: Vec<Vec<Point>> = chunk_lengths(iterations)
            .into_par_iter()
            .map(|(index, len)| self.propagate(len, &mut stream_rng(master_seed, index as u64)))
            .collect();
        chunks.concat()
    }

    /// Solve `iterations` samples and collect metrics
    ///
    /// In strict mode the first failing sample aborts the run.
    pub fn run<R: Rng>(&self, iterations: usize, rng: &mut R) -> Result<Propagation, SamplingError> {
        tracing::debug!("Starting sequential propagation of {} samples", iterations);
        let start = Instant::now();

        let (points, mut metrics) = self.run_chunk(iterations, rng)?;
        metrics.elapsed_ms = elapsed_ms(start);

        self.report(&metrics);
        Ok(Propagation { points, metrics })
    }

    /// Chunked parallel [`run`](Self::run) seeded from `master_seed`
    ///
    /// In strict mode the reported error belongs to the earliest failing sample.
    pub fn run_parallel(&self, iterations: usize, master_seed: u64) -> Result<Propagation, SamplingError> {
        let lengths = chunk_lengths(iterations);
        tracing::debug!(
            "Starting parallel propagation of {} samples in {} chunks",
            iterations,
            lengths.len()
        );
        let start = Instant::now();

        let results: Vec<Result<(Vec<Point>, PropagationMetrics), SolverError>> = lengths
            .into_par_iter()
            .map(|(index, len)| self.run_chunk(len, &mut stream_rng(master_seed, index as u64)))
            .collect();

        let mut points = Vec::with_capacity(iterations);
        let mut metrics = PropagationMetrics::new();
        for result in results {
            let (chunk_points, chunk_metrics) = result?;
            points.extend(chunk_points);
            metrics.merge(&chunk_metrics);
        }
        metrics.elapsed_ms = elapsed_ms(start);

        self.report(&metrics);
        Ok(Propagation { points, metrics })
    }

    fn run_chunk<R: Rng>(
        &self,
        len: usize,
        rng: &mut R,
    ) -> Result<(Vec<Point>, PropagationMetrics), SolverError> {
        let mut points = Vec::with_capacity(len);
        let mut metrics = PropagationMetrics::new();

        for _ in 0..len {
            let outcome = self.solve_sample_checked(rng)?;
            let point = outcome.point();
            metrics.record(&outcome, point.is_finite() && self.hull.contains(point));
            points.push(point);
        }

        Ok((points, metrics))
    }

    fn report(&self, metrics: &PropagationMetrics) {
        tracing::info!(
            "Propagation finished: {} samples, {} converged, {} inside hull, {}ms",
            metrics.samples,
            metrics.converged,
            metrics.within_hull,
            metrics.elapsed_ms
        );
        if metrics.non_finite > 0 || metrics.capped > 0 {
            tracing::warn!(
                "{} samples hit the iteration cap and {} produced non-finite points",
                metrics.capped,
                metrics.non_finite
            );
        }
    }
}

/// Solve `iterations` samples of `matrix x = vector` with tolerance `tolerance`
pub fn propagate(
    matrix: IntervalMatrix,
    vector: IntervalVector,
    iterations: usize,
    tolerance: f64,
    seed: u64,
) -> Vec<Point> {
    let solver = JacobiSolver::new(tolerance, DEFAULT_MAX_ITERATIONS);
    MonteCarloPropagator::new(matrix, vector, solver).propagate_seeded(iterations, seed)
}

/// `(chunk index, chunk length)` pairs covering `iterations` samples
fn chunk_lengths(iterations: usize) -> Vec<(usize, usize)> {
    (0..iterations.div_ceil(CHUNK_SIZE))
        .map(|index| {
            let start = index * CHUNK_SIZE;
            (index, CHUNK_SIZE.min(iterations - start))
        })
        .collect()
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
