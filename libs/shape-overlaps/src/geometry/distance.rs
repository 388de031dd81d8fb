//! Distance helpers.

use crate::core::point::Point;

/// Squared distance from `point` to the closed segment `start..end`.
///
/// Projects onto the segment and clamps to the endpoints; a zero-length
/// segment degenerates to the distance to `start`.
pub fn point_segment_distance_squared(point: Point, start: Point, end: Point) -> f64 {
    let segment = end - start;
    let length_squared = segment.length_squared();
    if length_squared == 0.0 {
        return point.distance_squared(start);
    }

    let t = ((point - start).dot(segment) / length_squared).clamp(0.0, 1.0);
    point.distance_squared(start + segment * t)
}
