//! Metrics collected during Monte Carlo propagation

use crate::SolveOutcome;
use regionlab_domain::Point;
use serde::Serialize;

/// Axis-aligned bounding box of a point cloud
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    /// Smallest x
    pub min_x: f64,
    /// Largest x
    pub max_x: f64,
    /// Smallest y
    pub min_y: f64,
    /// Largest y
    pub max_y: f64,
}

impl Bounds {
    fn of(point: Point) -> Self {
        Self {
            min_x: point.x,
            max_x: point.x,
            min_y: point.y,
            max_y: point.y,
        }
    }

    fn include(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
    }

    fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Metrics collected during a propagation run
///
/// Tracks solver outcomes, the spread of the finite solutions and how many
/// of them fall inside the reference hull.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropagationMetrics {
    /// Systems sampled and solved
    pub samples: usize,

    /// Solves that converged
    pub converged: usize,

    /// Solves stopped by the iteration cap
    pub capped: usize,

    /// Solves that produced NaN or infinity
    pub non_finite: usize,

    /// Sum of solver iteration counts
    pub total_solver_iterations: u64,

    /// Largest single solver iteration count
    pub max_solver_iterations: usize,

    /// Finite solutions inside the reference hull
    pub within_hull: usize,

    /// Bounding box of finite solutions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,

    /// Sum of finite solution coordinates, for the mean
    #[serde(skip)]
    sum: (f64, f64),

    /// Wall-clock time of the run in milliseconds
    pub elapsed_ms: u64,
}

impl PropagationMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one solve; `within_hull` tells whether its point lies in the hull
    pub fn record(&mut self, outcome: &SolveOutcome, within_hull: bool) {
        self.samples += 1;
        let iterations = outcome.iterations();
        self.total_solver_iterations += iterations as u64;
        self.max_solver_iterations = self.max_solver_iterations.max(iterations);

        match outcome {
            SolveOutcome::Converged { .. } => self.converged += 1,
            SolveOutcome::MaxIterationsExceeded { .. } => self.capped += 1,
            SolveOutcome::NonFinite { .. } => {
                self.non_finite += 1;
                return;
            }
        }

        let point = outcome.point();
        if within_hull {
            self.within_hull += 1;
        }
        self.sum.0 += point.x;
        self.sum.1 += point.y;
        match self.bounds.as_mut() {
            Some(bounds) => bounds.include(point),
            None => self.bounds = Some(Bounds::of(point)),
        }
    }

    /// Fold another run's metrics into this one
    pub fn merge(&mut self, other: &PropagationMetrics) {
        self.samples += other.samples;
        self.converged += other.converged;
        self.capped += other.capped;
        self.non_finite += other.non_finite;
        self.total_solver_iterations += other.total_solver_iterations;
        self.max_solver_iterations = self.max_solver_iterations.max(other.max_solver_iterations);
        self.within_hull += other.within_hull;
        self.sum.0 += other.sum.0;
        self.sum.1 += other.sum.1;
        self.bounds = match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (a, b) => a.or(b),
        };
        self.elapsed_ms = self.elapsed_ms.max(other.elapsed_ms);
    }

    /// Number of finite solutions
    pub fn finite(&self) -> usize {
        self.converged + self.capped
    }

    /// Mean of the finite solutions
    pub fn mean(&self) -> Option<Point> {
        let finite = self.finite();
        if finite == 0 {
            return None;
        }
        let n = finite as f64;
        Some(Point::new(self.sum.0 / n, self.sum.1 / n))
    }

    /// Average solver iterations per sample
    pub fn mean_solver_iterations(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.total_solver_iterations as f64 / self.samples as f64
        }
    }

    /// Fraction of finite solutions inside the reference hull
    pub fn hull_coverage(&self) -> f64 {
        let finite = self.finite();
        if finite == 0 {
            0.0
        } else {
            self.within_hull as f64 / finite as f64
        }
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Propagation Metrics Summary".to_string(),
            "===========================".to_string(),
            format!("Samples: {}", self.samples),
            format!("Converged: {}", self.converged),
            format!("Iteration cap reached: {}", self.capped),
            format!("Non-finite: {}", self.non_finite),
            format!("Mean solver iterations: {:.2}", self.mean_solver_iterations()),
            format!("Max solver iterations: {}", self.max_solver_iterations),
            format!("Elapsed: {}ms", self.elapsed_ms),
        ];

        if let Some(bounds) = self.bounds {
            lines.push(String::new());
            lines.push(format!("x range: [{:.4}, {:.4}]", bounds.min_x, bounds.max_x));
            lines.push(format!("y range: [{:.4}, {:.4}]", bounds.min_y, bounds.max_y));
        }
        if let Some(mean) = self.mean() {
            lines.push(format!("Mean solution: ({:.4}, {:.4})", mean.x, mean.y));
            lines.push(format!(
                "Inside reference hull: {} ({:.2}%)",
                self.within_hull,
                self.hull_coverage() * 100.0
            ));
        }

        lines.join("\n")
    }
}
