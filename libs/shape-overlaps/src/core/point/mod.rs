//! 2D point definitions for the overlap kernel.
//!
//! Provides the `Point` alias for `glam::DVec2`. A point is used both as a
//! position and as a direction when it carries a separating axis.

pub use glam::DVec2 as Point;

/// Creates the origin.
///
/// # Examples
/// ```
/// use shape_overlaps::core::point::{origin, Point};
///
/// assert_eq!(origin(), Point::new(0.0, 0.0));
/// ```
pub fn origin() -> Point {
    Point::new(0.0, 0.0)
}

/// Creates the point at `radius` along the direction `angle` (radians).
///
/// # Examples
/// ```
/// use shape_overlaps::core::point::from_polar;
///
/// let p = from_polar(2.0, 0.0);
/// assert_eq!(p.x, 2.0);
/// assert_eq!(p.y, 0.0);
/// ```
pub fn from_polar(radius: f64, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(radius * cos, radius * sin)
}

/// Rotates `point` counter-clockwise about the origin by `angle` radians.
pub fn rotate(point: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(point.x * cos - point.y * sin, point.x * sin + point.y * cos)
}

#[cfg(test)]
mod tests;
