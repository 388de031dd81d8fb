use super::*;
use approx::assert_abs_diff_eq;
use std::f64::consts::FRAC_PI_2;

#[test]
fn test_origin() {
    let p = origin();
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, 0.0);
}

#[test]
fn test_from_polar_quarter_turn() {
    let p = from_polar(3.0, FRAC_PI_2);
    assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p.y, 3.0, epsilon = 1e-12);
}

#[test]
fn test_rotate_matches_polar() {
    let rotated = rotate(Point::new(2.0, 0.0), 0.7);
    let expected = from_polar(2.0, 0.7);
    assert_abs_diff_eq!(rotated.x, expected.x, epsilon = 1e-12);
    assert_abs_diff_eq!(rotated.y, expected.y, epsilon = 1e-12);
}

#[test]
fn test_rotate_inverse() {
    let p = Point::new(1.5, -0.25);
    let back = rotate(rotate(p, 1.2), -1.2);
    assert_abs_diff_eq!(back.x, p.x, epsilon = 1e-12);
    assert_abs_diff_eq!(back.y, p.y, epsilon = 1e-12);
}
