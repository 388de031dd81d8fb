//! Geometric primitives shared by every shape.
//!
//! Includes the point alias (`Point`) and the axis-aligned `BoundingBox`.

pub mod bounds;
pub mod point;
