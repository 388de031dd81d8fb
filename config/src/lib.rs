//! # Config Crate
//!
//! Centralized configuration constants for the shape overlap kernel.
//! All tolerances and tessellation parameters are defined here so the
//! containment, SAT and approximation code never carries literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{APPROXIMATION_SEGMENTS, EPSILON_TOLERANCE};
//!
//! // A rotation this small counts as axis-aligned
//! let rotation: f64 = 1e-12;
//! assert!(rotation.abs() < EPSILON_TOLERANCE);
//!
//! // Curved shapes are sampled into this many polygon vertices
//! assert_eq!(APPROXIMATION_SEGMENTS, 16);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Overrides**: `GlobalConfig::new` rejects unusable values

pub mod constants;
