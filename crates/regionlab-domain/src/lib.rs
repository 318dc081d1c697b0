//! regionlab Domain Layer
//!
//! This crate contains the value types and pure logic shared by every other
//! regionlab crate. It performs no I/O and draws no random numbers; sampling,
//! solving and presentation live in `regionlab-sampling` and `regionlab-cli`.
//!
//! ## Key Concepts
//!
//! - **Point**: an immutable 2D coordinate `(x, y)`
//! - **Interval**: a closed range `[from, to]` describing uncertainty of one scalar
//! - **IntervalMatrix / IntervalVector**: the uncertain coefficients and
//!   right-hand side of a 2x2 system `Ax = b`
//! - **Predicate**: a pure `(x, y) -> bool` membership test
//! - **QuadrantSystem**: a conjunction of linear bounds valid in one sign quadrant
//! - **RegionClassifier**: dispatches a point to the system of its quadrant
//! - **Polygon**: the reference overlay handed to the renderer
//!
//! ## Example
//!
//! ```
//! use regionlab_domain::{Point, RegionClassifier};
//!
//! let classifier = RegionClassifier::reference();
//! assert!(classifier.contains(Point::new(0.5, 0.5)));
//! assert!(!classifier.contains(Point::new(5.0, 5.0)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod interval;
pub mod point;
pub mod polygon;
pub mod predicate;
pub mod region;

// Re-exports for convenience
pub use error::DomainError;
pub use interval::{Interval, IntervalMatrix, IntervalVector, Matrix2, Vector2};
pub use point::Point;
pub use polygon::Polygon;
pub use predicate::{Axis, LinearBound, Predicate, QuadrantSystem, Relation};
pub use region::{Quadrant, RegionClassifier};
