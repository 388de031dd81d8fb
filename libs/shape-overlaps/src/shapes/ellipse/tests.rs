use super::*;
use crate::core::point::rotate;
use crate::shapes::Polygon;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

fn ellipse(rotation: f64) -> Ellipse {
    Ellipse::new(Point::new(0.0, 0.0), 2.0, 1.0, rotation).unwrap()
}

#[test]
fn test_contains() {
    let e = ellipse(0.0);
    assert!(e.contains(Point::new(1.0, 0.0)));
    assert!(!e.contains(Point::new(3.0, 0.0)));
    assert!(e.contains(Point::new(2.0, 0.0)));
    assert!(e.contains(Point::new(0.0, 1.0)));
    assert!(!e.contains(Point::new(0.0, 1.1)));
}

#[test]
fn test_contains_rotated() {
    let e = ellipse(FRAC_PI_2);
    assert!(e.contains(Point::new(0.0, 1.9)));
    assert!(!e.contains(Point::new(1.9, 0.0)));
}

#[test]
fn test_bounding_box_axis_aligned() {
    assert_eq!(ellipse(0.0).bounding_box(), BoundingBox::new(-2.0, -1.0, 2.0, 1.0));
}

#[test]
fn test_bounding_box_rotated() {
    let bbox = ellipse(FRAC_PI_4).bounding_box();
    let half = (2.5f64).sqrt();
    assert_relative_eq!(bbox.max_x, half, epsilon = 1e-12);
    assert_relative_eq!(bbox.max_y, half, epsilon = 1e-12);
    assert_relative_eq!(bbox.min_x, -half, epsilon = 1e-12);
}

#[test]
fn test_approximation_has_sixteen_vertices_on_boundary() {
    let e = Ellipse::new(Point::new(3.0, -1.0), 4.0, 1.5, 0.4).unwrap();
    let polygon = e.approximate_as_polygon();
    assert_eq!(polygon.vertices().len(), 16);

    for v in polygon.vertices() {
        let local = rotate(*v - e.center(), -e.rotation());
        let value = (local.x / 4.0).powi(2) + (local.y / 1.5).powi(2);
        assert_abs_diff_eq!(value, 1.0, epsilon = 1e-9);
        let b = e.bounding_box();
        let slack = BoundingBox::new(b.min_x - 1e-9, b.min_y - 1e-9, b.max_x + 1e-9, b.max_y + 1e-9);
        assert!(slack.contains(*v));
    }
}

#[test]
fn test_approximation_with_custom_segments() {
    assert_eq!(ellipse(0.0).approximate_as_polygon_with(40).vertices().len(), 40);
}

#[test]
fn test_axis_alignment() {
    assert!(ellipse(0.0).is_axis_aligned(1e-9));
    assert!(ellipse(1e-12).is_axis_aligned(1e-9));
    assert!(!ellipse(0.1).is_axis_aligned(1e-9));
}

#[test]
fn test_radius_is_larger_axis() {
    let e = Ellipse::new(Point::new(0.0, 0.0), 1.0, 3.0, 0.0).unwrap();
    assert_eq!(e.radius(), 3.0);
}

#[test]
fn test_invalid_axes() {
    let origin = Point::new(0.0, 0.0);
    assert_eq!(
        Ellipse::new(origin, 0.0, 1.0, 0.0).unwrap_err(),
        ShapeError::InvalidAxis {
            axis: "semi-major",
            value: 0.0
        }
    );
    assert!(Ellipse::new(origin, 1.0, -2.0, 0.0).is_err());
    assert!(Ellipse::new(origin, 1.0, 1.0, f64::INFINITY).is_err());
}
