//! 2D overlap and containment kernel.
//!
//! Answers two questions about plane shapes: do two shapes overlap, and does
//! a point lie inside a shape. Polygons are compared with the Separating Axis
//! Theorem, points are located with even-odd ray casting, and curved shapes
//! fall back to a fixed-segment polygon approximation so one SAT
//! implementation covers every pair.
//!
//! ## Example
//!
//! ```rust
//! use shape_overlaps::{overlaps, Ellipse, Point, RegularPolygon, Shape};
//!
//! let square = RegularPolygon::new(Point::new(0.0, 0.0), 1.0, 4, 0.0).unwrap();
//! let ellipse = Ellipse::new(Point::new(1.5, 0.0), 1.0, 0.5, 0.3).unwrap();
//!
//! assert!(overlaps(&Shape::from(square), &Shape::from(ellipse)));
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod geometry;
pub mod overlap;
pub mod scene;
pub mod shapes;

pub use config::KernelConfig;
pub use core::bounds::BoundingBox;
pub use core::point::Point;
pub use error::{ShapeError, ShapeResult};
pub use overlap::{overlaps, overlaps_with};
pub use shapes::{Circle, Ellipse, IrregularPolygon, Polygon, RegularPolygon, Shape};

/// Returns `true` when `point` lies inside or on the boundary of `shape`.
///
/// # Examples
/// ```
/// use shape_overlaps::{contains, Circle, Point, Shape};
///
/// let circle = Shape::from(Circle::new(Point::new(0.0, 0.0), 1.0).unwrap());
/// assert!(contains(&circle, Point::new(0.5, 0.5)));
/// assert!(!contains(&circle, Point::new(1.0, 1.0)));
/// ```
pub fn contains(shape: &Shape, point: Point) -> bool {
    shape.contains(point)
}

/// Returns the axis-aligned bounding box of `shape`.
pub fn bounding_box(shape: &Shape) -> BoundingBox {
    shape.bounding_box()
}

/// Approximates `ellipse` as a polygon with the default segment count.
///
/// # Examples
/// ```
/// use shape_overlaps::{approximate_as_polygon, Ellipse, Point, Polygon};
///
/// let ellipse = Ellipse::new(Point::new(0.0, 0.0), 2.0, 1.0, 0.0).unwrap();
/// assert_eq!(approximate_as_polygon(&ellipse).vertices().len(), 16);
/// ```
pub fn approximate_as_polygon(ellipse: &Ellipse) -> IrregularPolygon {
    ellipse.approximate_as_polygon()
}
