//! Tests for the `Shape` enum wrappers.

use super::*;

fn samples() -> Vec<Shape> {
    vec![
        Circle::new(Point::new(0.0, 0.0), 1.0).unwrap().into(),
        RegularPolygon::new(Point::new(1.0, 1.0), 2.0, 5, 0.2).unwrap().into(),
        IrregularPolygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 2.0),
        ])
        .into(),
        Ellipse::new(Point::new(-2.0, 3.0), 2.0, 0.5, 1.0).unwrap().into(),
    ]
}

#[test]
fn test_shape_type_names() {
    let names: Vec<_> = samples().iter().map(Shape::shape_type).collect();
    assert_eq!(names, ["circle", "regularPolygon", "irregularPolygon", "ellipse"]);
}

#[test]
fn test_vertices_within_bounding_box() {
    for shape in samples() {
        let bbox = shape.bounding_box();
        let slack = BoundingBox::new(
            bbox.min_x - 1e-9,
            bbox.min_y - 1e-9,
            bbox.max_x + 1e-9,
            bbox.max_y + 1e-9,
        );
        let vertices = shape.vertices();
        assert!(!vertices.is_empty());
        for v in vertices {
            assert!(slack.contains(v), "{} vertex {v:?} outside {bbox}", shape.shape_type());
        }
    }
}

#[test]
fn test_curved_shapes_report_approximation() {
    let shapes = samples();
    assert_eq!(shapes[0].vertices().len(), 16);
    assert_eq!(shapes[3].vertices().len(), 16);
    assert_eq!(shapes[1].vertices().len(), 5);
}

#[test]
fn test_center_is_contained() {
    for shape in samples() {
        assert!(shape.contains(shape.center()), "{}", shape.shape_type());
    }
}

#[test]
fn test_as_polygon() {
    let shapes = samples();
    assert!(shapes[0].as_polygon().is_none());
    assert_eq!(shapes[1].as_polygon().map(|p| p.vertices().len()), Some(5));
    assert_eq!(shapes[2].as_polygon().map(|p| p.vertices().len()), Some(3));
    assert!(shapes[3].as_polygon().is_none());
}

#[test]
fn test_shapes_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Shape>();
}
