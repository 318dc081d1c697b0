//! Jacobi fixed-point solver for point-valued 2x2 systems
//!
//! Starting from `x = (0, 0)`, each sweep computes
//!
//! ```text
//! x0' = (b0 - a01 * x1) / a00
//! x1' = (b1 - a10 * x0) / a11
//! ```
//!
//! and stops once the max-norm of the update is at most the tolerance or the
//! iteration cap is reached. The iteration count reported in a
//! [`SolveOutcome`] is the number of sweeps whose update exceeded the
//! tolerance, so an already-exact second sweep reports 1 and a capped run
//! reports exactly `max_iterations`. A zero cap performs no sweep and reports
//! the starting point as capped.

use crate::config::{SolverConfig, SolverMode};
use crate::SolverError;
use regionlab_domain::{Matrix2, Point, Vector2};

/// Result of one solve
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolveOutcome {
    /// Update fell below the tolerance
    Converged {
        /// Final iterate
        point: Point,
        /// Sweeps that exceeded the tolerance
        iterations: usize,
    },
    /// Iteration cap reached with a finite iterate
    MaxIterationsExceeded {
        /// Last iterate
        point: Point,
        /// Sweeps performed
        iterations: usize,
    },
    /// Iterate contains NaN or infinity
    NonFinite {
        /// Last iterate
        point: Point,
        /// Sweeps that exceeded the tolerance
        iterations: usize,
    },
}

impl SolveOutcome {
    /// The final iterate, whatever its status
    pub fn point(&self) -> Point {
        match *self {
            SolveOutcome::Converged { point, .. }
            | SolveOutcome::MaxIterationsExceeded { point, .. }
            | SolveOutcome::NonFinite { point, .. } => point,
        }
    }

    /// Iteration count (see module docs)
    pub fn iterations(&self) -> usize {
        match *self {
            SolveOutcome::Converged { iterations, .. }
            | SolveOutcome::MaxIterationsExceeded { iterations, .. }
            | SolveOutcome::NonFinite { iterations, .. } => iterations,
        }
    }

    /// Whether the solve converged to a finite point
    pub fn is_converged(&self) -> bool {
        matches!(self, SolveOutcome::Converged { .. })
    }

    /// Convert to a strict result
    pub fn into_result(self) -> Result<Point, SolverError> {
        match self {
            SolveOutcome::Converged { point, .. } => Ok(point),
            SolveOutcome::MaxIterationsExceeded { point, iterations } => {
                Err(SolverError::NotConverged { iterations, point })
            }
            SolveOutcome::NonFinite { point, iterations } => {
                Err(SolverError::NonFinite { iterations, point })
            }
        }
    }
}

/// Jacobi iteration for 2x2 systems
///
/// # Examples
///
/// ```
/// use regionlab_sampling::JacobiSolver;
///
/// let solver = JacobiSolver::default();
/// let outcome = solver.solve(&[[1.0, 0.0], [0.0, 1.0]], &[5.0, 7.0]);
/// assert!(outcome.is_converged());
/// assert_eq!(outcome.iterations(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct JacobiSolver {
    tolerance: f64,
    max_iterations: usize,
    mode: SolverMode,
}

impl Default for JacobiSolver {
    fn default() -> Self {
        Self::from_config(&SolverConfig::default())
    }
}

impl JacobiSolver {
    /// Create a permissive solver with the given tolerance and cap
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
            mode: SolverMode::Permissive,
        }
    }

    /// Create a solver from configuration
    pub fn from_config(config: &SolverConfig) -> Self {
        Self {
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
            mode: config.mode,
        }
    }

    /// Switch the error reporting mode
    pub fn with_mode(mut self, mode: SolverMode) -> Self {
        self.mode = mode;
        self
    }

    /// Error reporting mode
    pub fn mode(&self) -> SolverMode {
        self.mode
    }

    /// Solve `a * x = b`, always returning the last iterate
    pub fn solve(&self, a: &Matrix2, b: &Vector2) -> SolveOutcome {
        let [[a00, a01], [a10, a11]] = *a;
        let [b0, b1] = *b;

        let (mut x0, mut x1) = (0.0_f64, 0.0_f64);
        let mut iterations = 0;
        let mut norm = f64::INFINITY;

        while iterations < self.max_iterations {
            let next0 = divide_by_diagonal(b0 - a01 * x1, a00);
            let next1 = divide_by_diagonal(b1 - a10 * x0, a11);

            norm = nan_max((next0 - x0).abs(), (next1 - x1).abs());
            x0 = next0;
            x1 = next1;

            // A NaN norm fails this comparison and ends the loop
            let exceeded = norm > self.tolerance;
            if !exceeded {
                break;
            }
            iterations += 1;
        }

        let point = Point::new(x0, x1);
        if !point.is_finite() {
            SolveOutcome::NonFinite { point, iterations }
        } else if norm <= self.tolerance {
            SolveOutcome::Converged { point, iterations }
        } else {
            SolveOutcome::MaxIterationsExceeded { point, iterations }
        }
    }

    /// Solve according to the configured mode
    ///
    /// Permissive mode never fails. Strict mode rejects zero diagonals before
    /// iterating and turns every non-converged outcome into an error.
    pub fn solve_checked(&self, a: &Matrix2, b: &Vector2) -> Result<SolveOutcome, SolverError> {
        match self.mode {
            SolverMode::Permissive => Ok(self.solve(a, b)),
            SolverMode::Strict => self.solve_strict(a, b).map(|(point, iterations)| {
                SolveOutcome::Converged { point, iterations }
            }),
        }
    }

    /// Strict solve: converged point and its iteration count, or an error
    pub fn solve_strict(&self, a: &Matrix2, b: &Vector2) -> Result<(Point, usize), SolverError> {
        for row in 0..2 {
            if a[row][row] == 0.0 {
                return Err(SolverError::ZeroDiagonal { row });
            }
        }
        let outcome = self.solve(a, b);
        let iterations = outcome.iterations();
        outcome.into_result().map(|point| (point, iterations))
    }
}

/// Solve `a * x = b` with the default iteration cap, returning the last iterate
pub fn solve(a: &Matrix2, b: &Vector2, tolerance: f64) -> Point {
    JacobiSolver::new(tolerance, crate::config::DEFAULT_MAX_ITERATIONS)
        .solve(a, b)
        .point()
}

/// Unchecked division by a diagonal entry; zero yields IEEE infinity or NaN
#[inline]
fn divide_by_diagonal(numerator: f64, diagonal: f64) -> f64 {
    numerator / diagonal
}

/// Maximum that returns NaN if either argument is NaN
#[inline]
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
