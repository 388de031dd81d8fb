//! # Shapes
//!
//! The closed set of shapes the kernel understands.
//!
//! ## Structure
//!
//! - `circle`: center + radius
//! - `regular_polygon`: center, circumradius, side count, rotation
//! - `irregular_polygon`: explicit vertex ring
//! - `ellipse`: center, semi-axes, rotation
//!
//! Polygon variants share their bounding box and containment logic through
//! the [`Polygon`] trait; the algorithms themselves live in
//! [`crate::geometry`].

pub mod circle;
pub mod ellipse;
pub mod irregular_polygon;
pub mod regular_polygon;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use irregular_polygon::IrregularPolygon;
pub use regular_polygon::RegularPolygon;

use crate::config::KernelConfig;
use crate::core::bounds::BoundingBox;
use crate::core::point::Point;
use crate::geometry::point_in_polygon;

// =============================================================================
// POLYGON CAPABILITY
// =============================================================================

/// Shapes described exactly by a vertex ring.
///
/// The closing edge from the last vertex to the first is implicit.
pub trait Polygon {
    /// Ordered vertex ring.
    fn vertices(&self) -> &[Point];

    /// Tightest box around the vertices; the zero box for an empty ring.
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.vertices())
    }

    /// Even-odd containment, pruned by the bounding box.
    fn contains(&self, point: Point) -> bool {
        point_in_polygon(point, self.vertices())
    }
}

// =============================================================================
// SHAPE
// =============================================================================

/// Any shape the kernel can compare.
///
/// ## Example
///
/// ```rust
/// use shape_overlaps::{Circle, IrregularPolygon, Point, Shape};
///
/// let circle = Shape::from(Circle::new(Point::new(0.0, 0.0), 1.0).unwrap());
/// let triangle = Shape::from(IrregularPolygon::new(vec![
///     Point::new(0.5, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(3.0, 2.0),
/// ]));
///
/// assert!(circle.overlaps(&triangle));
/// assert_eq!(triangle.shape_type(), "irregularPolygon");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Circle.
    Circle(Circle),
    /// Regular polygon.
    RegularPolygon(RegularPolygon),
    /// Irregular (assumed convex for overlap) polygon.
    IrregularPolygon(IrregularPolygon),
    /// Ellipse.
    Ellipse(Ellipse),
}

impl Shape {
    /// Canonical type name.
    pub fn shape_type(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::RegularPolygon(_) => "regularPolygon",
            Shape::IrregularPolygon(_) => "irregularPolygon",
            Shape::Ellipse(_) => "ellipse",
        }
    }

    /// Center point. Irregular polygons report their vertex average.
    pub fn center(&self) -> Point {
        match self {
            Shape::Circle(c) => c.center(),
            Shape::RegularPolygon(p) => p.center(),
            Shape::IrregularPolygon(p) => p.center(),
            Shape::Ellipse(e) => e.center(),
        }
    }

    /// Axis-aligned bounding box, recomputed on every call.
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Shape::Circle(c) => c.bounding_box(),
            Shape::RegularPolygon(p) => p.bounding_box(),
            Shape::IrregularPolygon(p) => p.bounding_box(),
            Shape::Ellipse(e) => e.bounding_box(),
        }
    }

    /// Boundary-inclusive point containment.
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Shape::Circle(c) => c.contains(point),
            Shape::RegularPolygon(p) => p.contains(point),
            Shape::IrregularPolygon(p) => p.contains(point),
            Shape::Ellipse(e) => e.contains(point),
        }
    }

    /// Vertex ring: exact for polygons, the default approximation for
    /// circles and ellipses.
    pub fn vertices(&self) -> Vec<Point> {
        let segments = KernelConfig::default().approximation_segments;
        match self {
            Shape::Circle(c) => c.approximate_as_polygon_with(segments).into_vertices(),
            Shape::RegularPolygon(p) => p.vertices().to_vec(),
            Shape::IrregularPolygon(p) => p.vertices().to_vec(),
            Shape::Ellipse(e) => e.approximation_vertices(segments),
        }
    }

    /// The polygon view of this shape, if it has an exact vertex ring.
    pub fn as_polygon(&self) -> Option<&dyn Polygon> {
        match self {
            Shape::RegularPolygon(p) => Some(p),
            Shape::IrregularPolygon(p) => Some(p),
            Shape::Circle(_) | Shape::Ellipse(_) => None,
        }
    }

    /// Returns `true` when this shape and `other` overlap.
    ///
    /// See [`crate::overlap::overlaps`].
    pub fn overlaps(&self, other: &Shape) -> bool {
        crate::overlap::overlaps(self, other)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<RegularPolygon> for Shape {
    fn from(polygon: RegularPolygon) -> Self {
        Shape::RegularPolygon(polygon)
    }
}

impl From<IrregularPolygon> for Shape {
    fn from(polygon: IrregularPolygon) -> Self {
        Shape::IrregularPolygon(polygon)
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Shape::Ellipse(ellipse)
    }
}

#[cfg(test)]
mod tests;
