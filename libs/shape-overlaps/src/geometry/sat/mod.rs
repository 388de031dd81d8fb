//! # Separating Axis Theorem
//!
//! Overlap test for two convex polygons. Two convex polygons are disjoint iff
//! some edge normal of either polygon separates their projections, so the
//! candidate axes are exactly the unit normals of both edge rings.
//!
//! ## Algorithm
//!
//! ```text
//! axes = normals(A) ∪ normals(B)
//! for axis in axes:
//!     [min_a, max_a] = project(A, axis)
//!     [min_b, max_b] = project(B, axis)
//!     if max_a < min_b or max_b < min_a: return false
//! return true
//! ```
//!
//! Separation uses strict `<`, so polygons whose projections only touch are
//! reported as overlapping. The bounding-box pre-check belongs to the caller.
//!
//! Results are exact for convex input only; concave rings are treated as
//! their edge normals suggest, which can report false overlaps.

use crate::core::point::Point;

// =============================================================================
// PROJECTION
// =============================================================================

/// Closed interval covered by a vertex ring projected onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Smallest dot product.
    pub min: f64,
    /// Largest dot product.
    pub max: f64,
}

impl Projection {
    /// Returns `true` when the intervals share at least one point.
    #[inline]
    pub fn overlaps(&self, other: &Projection) -> bool {
        !(self.max < other.min || other.max < self.min)
    }
}

/// Projects every vertex onto `axis`.
///
/// Returns `None` for an empty ring so the caller never compares against
/// unset extrema.
pub fn project(vertices: &[Point], axis: Point) -> Option<Projection> {
    let (first, rest) = vertices.split_first()?;
    let start = first.dot(axis);

    Some(rest.iter().fold(
        Projection {
            min: start,
            max: start,
        },
        |acc, vertex| {
            let d = vertex.dot(axis);
            Projection {
                min: acc.min.min(d),
                max: acc.max.max(d),
            }
        },
    ))
}

// =============================================================================
// AXES
// =============================================================================

/// Unit edge normals of a vertex ring, including the closing edge.
///
/// Each edge `p[i+1] - p[i]` is turned into its perpendicular `(-e.y, e.x)`.
/// Edges whose normal length does not exceed `tolerance` are skipped.
pub fn edge_axes(vertices: &[Point], tolerance: f64) -> Vec<Point> {
    let n = vertices.len();
    let mut axes = Vec::with_capacity(n);

    for i in 0..n {
        let normal = (vertices[(i + 1) % n] - vertices[i]).perp();
        let length = normal.length();
        if length > tolerance {
            axes.push(normal / length);
        }
    }

    axes
}

// =============================================================================
// OVERLAP
// =============================================================================

/// Returns `true` when no edge normal of `a` or `b` separates them.
///
/// A polygon without vertices has no area and overlaps nothing.
///
/// ## Example
///
/// ```rust
/// use shape_overlaps::geometry::polygons_overlap;
/// use shape_overlaps::Point;
///
/// let square = |cx: f64, cy: f64| {
///     vec![
///         Point::new(cx - 0.5, cy - 0.5),
///         Point::new(cx + 0.5, cy - 0.5),
///         Point::new(cx + 0.5, cy + 0.5),
///         Point::new(cx - 0.5, cy + 0.5),
///     ]
/// };
/// assert!(polygons_overlap(&square(0.0, 0.0), &square(0.5, 0.5), 1e-9));
/// assert!(!polygons_overlap(&square(0.0, 0.0), &square(2.0, 2.0), 1e-9));
/// ```
pub fn polygons_overlap(a: &[Point], b: &[Point], tolerance: f64) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let mut axes = edge_axes(a, tolerance);
    axes.extend(edge_axes(b, tolerance));

    for axis in axes {
        let (Some(proj_a), Some(proj_b)) = (project(a, axis), project(b, axis)) else {
            return false;
        };
        if !proj_a.overlaps(&proj_b) {
            return false;
        }
    }

    true
}
