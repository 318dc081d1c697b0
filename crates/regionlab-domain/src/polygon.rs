//! Reference polygon overlaid on the rendered scene

use crate::{DomainError, Point};
use serde::Serialize;

/// Closed polygon given by its vertices in drawing order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from at least three vertices
    pub fn new(vertices: Vec<Point>) -> Result<Self, DomainError> {
        if vertices.len() < 3 {
            return Err(DomainError::DegeneratePolygon(vertices.len()));
        }
        Ok(Self { vertices })
    }

    /// Interval hull of the reference system's solution set,
    /// `(-4,-3.5), (-4,3.5), (4,3.5), (4,-3.5)`
    pub fn reference() -> Self {
        Self {
            vertices: vec![
                Point::new(-4.0, -3.5),
                Point::new(-4.0, 3.5),
                Point::new(4.0, 3.5),
                Point::new(4.0, -3.5),
            ],
        }
    }

    /// Vertices in drawing order
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Even-odd ray casting test; points exactly on an edge may go either way
    pub fn contains(&self, point: Point) -> bool {
        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            let (a, b) = (self.vertices[i], self.vertices[j]);
            if (a.y > point.y) != (b.y > point.y)
                && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}
