//! # Bounding Box
//!
//! Axis-aligned rectangle used as the cheap pre-filter for every overlap and
//! containment query. Boxes are derived from the current shape state on each
//! query and never cached.
//!
//! Both `overlaps` and `contains` use closed intervals, so boxes that share
//! only an edge or a corner still overlap.

use std::fmt;

use crate::core::point::Point;

// =============================================================================
// BOUNDING BOX
// =============================================================================

/// Axis-aligned bounding box with `min_x <= max_x` and `min_y <= max_y`.
///
/// ## Example
///
/// ```rust
/// use shape_overlaps::{BoundingBox, Point};
///
/// let a = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
/// let b = BoundingBox::new(1.0, 0.5, 2.0, 2.0);
/// assert!(a.overlaps(&b)); // touching edges count
/// assert!(a.contains(Point::new(1.0, 1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// Smallest x coordinate.
    pub min_x: f64,
    /// Smallest y coordinate.
    pub min_y: f64,
    /// Largest x coordinate.
    pub max_x: f64,
    /// Largest y coordinate.
    pub max_y: f64,
}

impl BoundingBox {
    /// Creates a box from its extrema.
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The degenerate box `[0, 0, 0, 0]` reported for empty vertex lists.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates the box spanning `center ± (half_width, half_height)`.
    #[must_use]
    pub fn from_center_extents(center: Point, half_width: f64, half_height: f64) -> Self {
        Self::new(
            center.x - half_width,
            center.y - half_height,
            center.x + half_width,
            center.y + half_height,
        )
    }

    /// Computes the tightest box around `points`.
    ///
    /// An empty slice yields [`BoundingBox::zero`].
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        let Some(first) = points.first() else {
            return Self::zero();
        };

        points.iter().skip(1).fold(
            Self::new(first.x, first.y, first.x, first.y),
            |acc, p| Self {
                min_x: acc.min_x.min(p.x),
                min_y: acc.min_y.min(p.y),
                max_x: acc.max_x.max(p.x),
                max_y: acc.max_y.max(p.y),
            },
        )
    }

    /// Width along the x axis.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height along the y axis.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns `true` unless one box lies strictly beside the other on some axis.
    #[must_use]
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        !(self.max_x < other.min_x
            || self.min_x > other.max_x
            || self.max_y < other.min_y
            || self.min_y > other.max_y)
    }

    /// Returns `true` when `point` lies within the closed bounds.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundingBox{{minX={}, minY={}, maxX={}, maxY={}}}",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
