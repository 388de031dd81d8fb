use super::*;
use crate::core::bounds::BoundingBox;

fn kite() -> IrregularPolygon {
    IrregularPolygon::new(vec![
        Point::new(0.0, -1.0),
        Point::new(2.0, 0.0),
        Point::new(0.0, 3.0),
        Point::new(-2.0, 0.0),
    ])
}

#[test]
fn test_bounding_box() {
    assert_eq!(kite().bounding_box(), BoundingBox::new(-2.0, -1.0, 2.0, 3.0));
}

#[test]
fn test_contains() {
    let kite = kite();
    assert!(kite.contains(Point::new(0.0, 0.0)));
    assert!(kite.contains(Point::new(0.0, 2.5)));
    assert!(!kite.contains(Point::new(1.5, 2.0)));
}

#[test]
fn test_center_is_vertex_average() {
    assert_eq!(kite().center(), Point::new(0.0, 0.5));
}

#[test]
fn test_empty_polygon_is_degenerate() {
    let empty = IrregularPolygon::default();
    assert!(empty.vertices().is_empty());
    assert_eq!(empty.bounding_box(), BoundingBox::zero());
    assert_eq!(empty.center(), Point::new(0.0, 0.0));
    assert!(!empty.contains(Point::new(0.0, 0.0)));
    assert!(!empty.contains(Point::new(5.0, -3.0)));
}

#[test]
fn test_from_vec_round_trip() {
    let ring = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
    let polygon = IrregularPolygon::from(ring.clone());
    assert_eq!(polygon.into_vertices(), ring);
}
