//! Irregular polygon primitive.

use crate::core::point::{origin, Point};
use crate::shapes::Polygon;

/// Polygon given by an explicit vertex ring.
///
/// The closing edge from the last vertex back to the first is implicit.
/// Either winding is accepted. The ring may be empty, which models a
/// degenerate shape with no area.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IrregularPolygon {
    vertices: Vec<Point>,
}

impl IrregularPolygon {
    /// Wraps a vertex ring.
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Average of the vertices, or the origin for an empty ring.
    pub fn center(&self) -> Point {
        if self.vertices.is_empty() {
            return origin();
        }
        self.vertices.iter().copied().sum::<Point>() / self.vertices.len() as f64
    }

    /// Consumes the polygon and returns its ring.
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }
}

impl From<Vec<Point>> for IrregularPolygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

impl Polygon for IrregularPolygon {
    fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

#[cfg(test)]
mod tests;
