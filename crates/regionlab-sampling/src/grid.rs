//! Uniform grid sampling over a square bounding box

use crate::config::GridConfig;
use crate::SamplingError;
use rayon::prelude::*;
use regionlab_domain::{Point, Predicate};

/// Generates a `(steps + 1) x (steps + 1)` grid over `[from, to]^2`
///
/// # Examples
///
/// ```
/// use regionlab_sampling::GridSampler;
///
/// let grid = GridSampler::new(-1.0, 1.0, 2).unwrap().sample();
/// assert_eq!(grid.len(), 9);
/// assert_eq!(grid.get(0, 0).unwrap().y, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridSampler {
    from: f64,
    to: f64,
    steps: usize,
}

impl GridSampler {
    /// Create a sampler, rejecting zero steps and empty or non-finite bounds
    pub fn new(from: f64, to: f64, steps: usize) -> Result<Self, SamplingError> {
        Self::from_config(&GridConfig { from, to, steps })
    }

    /// Create a sampler from configuration
    pub fn from_config(config: &GridConfig) -> Result<Self, SamplingError> {
        config.validate()?;
        Ok(Self {
            from: config.from,
            to: config.to,
            steps: config.steps,
        })
    }

    /// Distance between adjacent grid lines
    pub fn delta(&self) -> f64 {
        (self.to - self.from) / self.steps as f64
    }

    /// Build the grid
    ///
    /// Row `i` (0 is the top) has `y = to - i * delta`; column `j` has
    /// `x = from + j * delta`.
    pub fn sample(&self) -> Grid {
        let width = self.steps + 1;
        let delta = self.delta();

        let mut points = Vec::with_capacity(width * width);
        for i in 0..width {
            let y = self.to - i as f64 * delta;
            for j in 0..width {
                points.push(Point::new(self.from + j as f64 * delta, y));
            }
        }

        tracing::debug!("Sampled {}x{} grid with delta {}", width, width, delta);
        Grid { points, width, delta }
    }
}

/// Dense row-major grid of points
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    points: Vec<Point>,
    width: usize,
    delta: f64,
}

impl Grid {
    /// Points per row (and rows per grid)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the grid has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Grid spacing
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Point at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<Point> {
        if row >= self.width || col >= self.width {
            return None;
        }
        self.points.get(row * self.width + col).copied()
    }

    /// All points in row-major order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.points.chunks(self.width)
    }
}

/// Keep the grid points accepted by `region`, in row-major order
pub fn filter_by_region<P: Predicate + ?Sized>(grid: &Grid, region: &P) -> Vec<Point> {
    let accepted: Vec<Point> = grid
        .points()
        .iter()
        .filter(|p| region.holds(p.x, p.y))
        .copied()
        .collect();

    tracing::info!(
        "Region filter accepted {} of {} grid points",
        accepted.len(),
        grid.len()
    );
    accepted
}

/// Parallel [`filter_by_region`]; the output order is the same
pub fn par_filter_by_region<P: Predicate + ?Sized>(grid: &Grid, region: &P) -> Vec<Point> {
    let accepted: Vec<Point> = grid
        .points()
        .par_iter()
        .filter(|p| region.holds(p.x, p.y))
        .copied()
        .collect();

    tracing::info!(
        "Region filter accepted {} of {} grid points ({} threads)",
        accepted.len(),
        grid.len(),
        rayon::current_num_threads()
    );
    accepted
}
