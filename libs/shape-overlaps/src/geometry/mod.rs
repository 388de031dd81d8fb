//! # Geometry Utilities
//!
//! Shape-independent algorithms called by the thin shape wrappers.
//!
//! ## Contents
//!
//! - **Containment**: `point_in_polygon` (even-odd ray casting), `point_in_ellipse`
//! - **SAT**: `edge_axes`, `project`, `polygons_overlap`
//! - **Approximation**: `ellipse_vertices`
//! - **Distance**: `point_segment_distance_squared`
//!
//! Every function works on borrowed vertex slices and allocates at most the
//! per-call axis or vertex buffer it returns.

pub mod approximation;
pub mod containment;
pub mod distance;
pub mod sat;

pub use approximation::ellipse_vertices;
pub use containment::{point_in_ellipse, point_in_polygon};
pub use distance::point_segment_distance_squared;
pub use sat::polygons_overlap;
