//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.approximation_segments >= MIN_POLYGON_SIDES);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 24).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, 2).unwrap_err(),
        ConfigError::InvalidSegments(2)
    );
    assert!(GlobalConfig::new(f64::NAN, 16).is_err());
    assert!(GlobalConfig::new(f64::INFINITY, 16).is_err());
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::InvalidSegments(1);
    assert!(err.to_string().contains("approximation_segments"));
    let err = ConfigError::InvalidTolerance(-1.0);
    assert!(err.to_string().contains("tolerance"));
}
