//! Circle primitive.

use crate::config::KernelConfig;
use crate::core::bounds::BoundingBox;
use crate::core::point::Point;
use crate::error::{check_center, check_radius, ShapeResult};
use crate::geometry::ellipse_vertices;
use crate::shapes::IrregularPolygon;

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Creates a circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the center is not finite or the radius is not a
    /// positive finite number.
    pub fn new(center: Point, radius: f64) -> ShapeResult<Self> {
        check_center(center)?;
        check_radius(radius)?;
        Ok(Self { center, radius })
    }

    /// Center point.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The square of side `2r` around the center.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_center_extents(self.center, self.radius, self.radius)
    }

    /// Boundary-inclusive distance test.
    pub fn contains(&self, point: Point) -> bool {
        point.distance_squared(self.center) <= self.radius * self.radius
    }

    /// Approximates the circle with the default segment count.
    pub fn approximate_as_polygon(&self) -> IrregularPolygon {
        self.approximate_as_polygon_with(KernelConfig::default().approximation_segments)
    }

    /// Approximates the circle as an inscribed regular `segments`-gon.
    pub fn approximate_as_polygon_with(&self, segments: u32) -> IrregularPolygon {
        IrregularPolygon::new(ellipse_vertices(
            self.center,
            self.radius,
            self.radius,
            0.0,
            segments,
        ))
    }
}

#[cfg(test)]
mod tests;
