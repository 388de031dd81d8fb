//! Point containment tests.

use crate::core::bounds::BoundingBox;
use crate::core::point::{rotate, Point};

/// Even-odd ray casting test.
///
/// Casts a horizontal ray to the right of `point` and toggles on every edge
/// it crosses. Exact for any simple polygon, convex or not. Horizontal edges
/// never satisfy the straddle condition, so the division is always safe.
///
/// An empty ring contains nothing.
///
/// # Examples
/// ```
/// use shape_overlaps::geometry::point_in_polygon;
/// use shape_overlaps::Point;
///
/// let triangle = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0)];
/// assert!(point_in_polygon(Point::new(1.0, 1.0), &triangle));
/// assert!(!point_in_polygon(Point::new(3.0, 3.0), &triangle));
/// ```
pub fn point_in_polygon(point: Point, vertices: &[Point]) -> bool {
    if !BoundingBox::from_points(vertices).contains(point) {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len().wrapping_sub(1);
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        if (vi.y > point.y) != (vj.y > point.y)
            && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Analytic ellipse test, boundary inclusive.
///
/// The point is moved into the ellipse's local frame (translate by
/// `-center`, rotate by `-rotation`) and checked against
/// `(x/a)^2 + (y/b)^2 <= 1`.
pub fn point_in_ellipse(
    point: Point,
    center: Point,
    semi_major: f64,
    semi_minor: f64,
    rotation: f64,
) -> bool {
    let local = rotate(point - center, -rotation);
    let nx = local.x / semi_major;
    let ny = local.y / semi_minor;
    nx * nx + ny * ny <= 1.0
}
