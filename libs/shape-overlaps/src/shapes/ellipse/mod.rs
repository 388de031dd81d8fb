//! Ellipse primitive.
//!
//! Ellipses carry no vertices. Overlap tests that need a polygon use
//! [`Ellipse::approximate_as_polygon`], a fixed-segment sampling of the
//! boundary.

use crate::config::KernelConfig;
use crate::core::bounds::BoundingBox;
use crate::core::point::Point;
use crate::error::{check_center, check_rotation, ShapeError, ShapeResult};
use crate::geometry::{ellipse_vertices, point_in_ellipse};
use crate::shapes::IrregularPolygon;

/// Rotated ellipse with semi-axes `semi_major` (local x) and `semi_minor`
/// (local y).
///
/// ## Example
///
/// ```rust
/// use shape_overlaps::{Ellipse, Point};
///
/// let ellipse = Ellipse::new(Point::new(0.0, 0.0), 2.0, 1.0, 0.0).unwrap();
/// assert!(ellipse.contains(Point::new(1.0, 0.0)));
/// assert!(ellipse.contains(Point::new(2.0, 0.0)));
/// assert!(!ellipse.contains(Point::new(3.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    center: Point,
    semi_major: f64,
    semi_minor: f64,
    rotation: f64,
}

impl Ellipse {
    /// Creates an ellipse. The rotation is in radians and is not normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if either semi-axis is not a positive finite number,
    /// or if the center or rotation is not finite.
    pub fn new(center: Point, semi_major: f64, semi_minor: f64, rotation: f64) -> ShapeResult<Self> {
        check_center(center)?;
        check_rotation(rotation)?;
        for (axis, value) in [("semi-major", semi_major), ("semi-minor", semi_minor)] {
            if !(value > 0.0 && value.is_finite()) {
                log::debug!("rejected ellipse {axis} axis {value}");
                return Err(ShapeError::InvalidAxis { axis, value });
            }
        }

        Ok(Self {
            center,
            semi_major,
            semi_minor,
            rotation,
        })
    }

    /// Center point.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Semi-axis along the local x direction.
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    /// Semi-axis along the local y direction.
    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    /// Rotation in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Larger of the two semi-axes.
    pub fn radius(&self) -> f64 {
        self.semi_major.max(self.semi_minor)
    }

    /// Returns `true` when the rotation is within `tolerance` of zero.
    ///
    /// Only the raw angle is inspected, so a rotation of `π` is not
    /// considered axis-aligned.
    pub fn is_axis_aligned(&self, tolerance: f64) -> bool {
        self.rotation.abs() < tolerance
    }

    /// Tight box around the rotated ellipse.
    ///
    /// The half extents are `sqrt(a² cos² θ + b² sin² θ)` along x and
    /// `sqrt(a² sin² θ + b² cos² θ)` along y.
    pub fn bounding_box(&self) -> BoundingBox {
        let (a, b) = (self.semi_major, self.semi_minor);
        let (sin, cos) = self.rotation.sin_cos();
        let half_width = (a * a * cos * cos + b * b * sin * sin).sqrt();
        let half_height = (a * a * sin * sin + b * b * cos * cos).sqrt();
        BoundingBox::from_center_extents(self.center, half_width, half_height)
    }

    /// Boundary-inclusive analytic containment.
    pub fn contains(&self, point: Point) -> bool {
        point_in_ellipse(
            point,
            self.center,
            self.semi_major,
            self.semi_minor,
            self.rotation,
        )
    }

    /// Boundary samples used by the polygon approximation.
    pub fn approximation_vertices(&self, segments: u32) -> Vec<Point> {
        ellipse_vertices(
            self.center,
            self.semi_major,
            self.semi_minor,
            self.rotation,
            segments,
        )
    }

    /// Approximates the ellipse with the default 16 segments.
    pub fn approximate_as_polygon(&self) -> IrregularPolygon {
        self.approximate_as_polygon_with(KernelConfig::default().approximation_segments)
    }

    /// Approximates the ellipse with `segments` vertices.
    pub fn approximate_as_polygon_with(&self, segments: u32) -> IrregularPolygon {
        IrregularPolygon::new(self.approximation_vertices(segments))
    }
}

#[cfg(test)]
mod tests;
