//! Kernel-level configuration helpers building on the shared `config` crate.
//!
//! The module wraps the workspace configuration so overlap and approximation
//! code can stay decoupled from literal constants.

use config::constants::{ConfigError, GlobalConfig, APPROXIMATION_SEGMENTS, EPSILON_TOLERANCE};
use thiserror::Error;

/// Overlap kernel configuration wrapper.
///
/// # Examples
/// ```
/// use shape_overlaps::config::KernelConfig;
/// let cfg = KernelConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// assert_eq!(cfg.approximation_segments, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Tolerance below which an edge normal is skipped and a rotation counts
    /// as axis-aligned.
    pub tolerance: f64,
    /// Vertex count used when approximating ellipses and circles.
    pub approximation_segments: u32,
}

impl KernelConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use shape_overlaps::config::KernelConfig;
    /// let cfg = KernelConfig::new(1.0e-8, 48).unwrap();
    /// assert_eq!(cfg.approximation_segments, 48);
    /// ```
    pub fn new(tolerance: f64, approximation_segments: u32) -> Result<Self, KernelConfigError> {
        let cfg = GlobalConfig::new(tolerance, approximation_segments)?;
        Ok(Self::from(cfg))
    }
}

impl From<GlobalConfig> for KernelConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            tolerance: cfg.tolerance,
            approximation_segments: cfg.approximation_segments,
        }
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            approximation_segments: APPROXIMATION_SEGMENTS,
        }
    }
}

/// Error wrapper for invalid kernel configuration.
#[derive(Debug, PartialEq, Error)]
#[error(transparent)]
pub struct KernelConfigError(#[from] ConfigError);
