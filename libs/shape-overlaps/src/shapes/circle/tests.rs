use super::*;
use crate::shapes::Polygon;
use approx::assert_abs_diff_eq;

#[test]
fn test_circle_bounding_box() {
    let c = Circle::new(Point::new(1.0, -1.0), 2.0).unwrap();
    assert_eq!(c.bounding_box(), BoundingBox::new(-1.0, -3.0, 3.0, 1.0));
}

#[test]
fn test_circle_contains_boundary() {
    let c = Circle::new(Point::new(0.0, 0.0), 1.0).unwrap();
    assert!(c.contains(Point::new(0.0, 0.0)));
    assert!(c.contains(Point::new(1.0, 0.0)));
    assert!(!c.contains(Point::new(0.8, 0.8)));
}

#[test]
fn test_circle_approximation() {
    let c = Circle::new(Point::new(2.0, 3.0), 1.5).unwrap();
    let polygon = c.approximate_as_polygon();
    assert_eq!(polygon.vertices().len(), 16);
    for v in polygon.vertices() {
        assert_abs_diff_eq!(v.distance(c.center()), 1.5, epsilon = 1e-12);
    }
}

#[test]
fn test_invalid_circle() {
    assert!(Circle::new(Point::new(0.0, 0.0), 0.0).is_err());
    assert!(Circle::new(Point::new(0.0, 0.0), -1.0).is_err());
    assert!(Circle::new(Point::new(f64::NAN, 0.0), 1.0).is_err());
}
