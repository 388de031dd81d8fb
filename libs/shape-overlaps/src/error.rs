//! # Error Types
//!
//! Errors raised while constructing shapes. Overlap and containment queries
//! never fail; they degrade to conservative answers instead.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur when a shape is built from invalid parameters.
///
/// ## Example
///
/// ```rust
/// use shape_overlaps::{Ellipse, Point, ShapeError};
///
/// match Ellipse::new(Point::new(0.0, 0.0), -1.0, 1.0, 0.0) {
///     Err(ShapeError::InvalidAxis { axis, .. }) => assert_eq!(axis, "semi-major"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Radius is zero, negative or not finite.
    #[error("radius must be positive and finite: {0}")]
    InvalidRadius(f64),

    /// Polygon has fewer sides than a triangle.
    #[error("polygon needs at least 3 sides: {0}")]
    InvalidSides(u32),

    /// Ellipse semi-axis is zero, negative or not finite.
    #[error("{axis} axis must be positive and finite: {value}")]
    InvalidAxis {
        /// Which semi-axis was rejected.
        axis: &'static str,
        /// The rejected length.
        value: f64,
    },

    /// A coordinate or angle is NaN or infinite.
    #[error("{0} must be finite")]
    NonFinite(&'static str),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for shape construction.
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Rejects a non-finite center.
pub(crate) fn check_center(center: crate::Point) -> ShapeResult<()> {
    if center.is_finite() {
        Ok(())
    } else {
        log::debug!("rejected non-finite center {center:?}");
        Err(ShapeError::NonFinite("center"))
    }
}

/// Rejects a non-finite rotation angle.
pub(crate) fn check_rotation(rotation: f64) -> ShapeResult<()> {
    if rotation.is_finite() {
        Ok(())
    } else {
        log::debug!("rejected non-finite rotation {rotation}");
        Err(ShapeError::NonFinite("rotation"))
    }
}

/// Rejects a radius that cannot enclose an area.
pub(crate) fn check_radius(radius: f64) -> ShapeResult<()> {
    if radius > 0.0 && radius.is_finite() {
        Ok(())
    } else {
        log::debug!("rejected radius {radius}");
        Err(ShapeError::InvalidRadius(radius))
    }
}

// =============================================================================
// TESTS
// =============================================================================
