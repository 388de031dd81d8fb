//! Curved-shape approximation.
//!
//! Samples an ellipse at evenly spaced parametric angles so the polygon
//! algorithms can stand in for exact curve intersection. The error is bounded
//! by the segment count; the default of 16 is fixed by
//! `config::constants::APPROXIMATION_SEGMENTS`.

use std::f64::consts::TAU;

use crate::core::point::{rotate, Point};

/// Samples `segments` boundary points of an ellipse, counter-clockwise from
/// the end of the rotated semi-major axis.
///
/// Point `i` is `center + R(rotation) * (a cos t, b sin t)` with
/// `t = 2π i / segments`. A circle is the case `a == b`.
///
/// # Examples
/// ```
/// use shape_overlaps::geometry::ellipse_vertices;
/// use shape_overlaps::Point;
///
/// let ring = ellipse_vertices(Point::new(0.0, 0.0), 2.0, 1.0, 0.0, 16);
/// assert_eq!(ring.len(), 16);
/// assert_eq!(ring[0], Point::new(2.0, 0.0));
/// ```
pub fn ellipse_vertices(
    center: Point,
    semi_major: f64,
    semi_minor: f64,
    rotation: f64,
    segments: u32,
) -> Vec<Point> {
    (0..segments)
        .map(|i| {
            let t = TAU * f64::from(i) / f64::from(segments);
            let (sin, cos) = t.sin_cos();
            center + rotate(Point::new(semi_major * cos, semi_minor * sin), rotation)
        })
        .collect()
}
