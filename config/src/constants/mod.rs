//! Centralized configuration values shared across the shape overlap kernel.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use thiserror::Error;

/// Numerical tolerance used by the overlap kernel.
///
/// Edges whose normal is shorter than this are skipped when collecting
/// separating axes, and ellipses rotated by less than this are treated as
/// axis-aligned.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Number of vertices sampled when a curved shape is approximated as a
/// polygon.
///
/// # Examples
/// ```
/// use config::constants::APPROXIMATION_SEGMENTS;
/// let step = std::f64::consts::TAU / APPROXIMATION_SEGMENTS as f64;
/// assert!(step < std::f64::consts::FRAC_PI_2);
/// ```
pub const APPROXIMATION_SEGMENTS: u32 = 16;

/// Smallest side count that still encloses an area.
///
/// # Examples
/// ```
/// use config::constants::MIN_POLYGON_SIDES;
/// let requested = 2u32;
/// assert!(requested < MIN_POLYGON_SIDES);
/// ```
pub const MIN_POLYGON_SIDES: u32 = 3;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert_eq!(config.approximation_segments, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into geometry kernels.
    pub tolerance: f64,
    /// Vertex count used when approximating curved shapes as polygons.
    pub approximation_segments: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and approximation segment count.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 24).expect("valid config");
    /// assert_eq!(cfg.approximation_segments, 24);
    /// ```
    pub fn new(tolerance: f64, approximation_segments: u32) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0 && tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if approximation_segments < MIN_POLYGON_SIDES {
            return Err(ConfigError::InvalidSegments(approximation_segments));
        }
        Ok(Self {
            tolerance,
            approximation_segments,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            approximation_segments: APPROXIMATION_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    #[error("tolerance must be positive: {0}")]
    InvalidTolerance(f64),
    /// Raised when the requested segment count is too small to form a polygon.
    #[error("approximation_segments must be >= 3: {0}")]
    InvalidSegments(u32),
}

#[cfg(test)]
mod tests;
