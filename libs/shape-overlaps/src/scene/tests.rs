use super::*;
use crate::shapes::{Circle, Ellipse, IrregularPolygon, RegularPolygon};

fn scene() -> Vec<Shape> {
    vec![
        // 0: overlaps 1
        Circle::new(Point::new(0.0, 0.0), 1.0).unwrap().into(),
        // 1: overlaps 0 and 2
        RegularPolygon::new(Point::new(1.5, 0.0), 1.0, 6, 0.0).unwrap().into(),
        // 2: overlaps 1
        Ellipse::new(Point::new(3.0, 0.0), 1.0, 0.5, 0.4).unwrap().into(),
        // 3: isolated
        IrregularPolygon::new(vec![
            Point::new(10.0, 10.0),
            Point::new(11.0, 10.0),
            Point::new(11.0, 11.0),
        ])
        .into(),
    ]
}

#[test]
fn test_overlapping_pairs() {
    assert_eq!(overlapping_pairs(&scene()), vec![(0, 1), (1, 2)]);
}

#[test]
fn test_pairs_agree_with_pairwise_queries() {
    let shapes = scene();
    let pairs = overlapping_pairs(&shapes);
    for i in 0..shapes.len() {
        for j in (i + 1)..shapes.len() {
            assert_eq!(
                pairs.contains(&(i, j)),
                crate::overlaps(&shapes[i], &shapes[j]),
                "pair ({i}, {j})"
            );
        }
    }
}

#[test]
fn test_overlapping_indices() {
    assert_eq!(overlapping_indices(&scene()), vec![0, 1, 2]);
}

#[test]
fn test_shapes_containing() {
    let shapes = scene();
    assert_eq!(shapes_containing(&shapes, Point::new(0.8, 0.0)), vec![0, 1]);
    assert_eq!(shapes_containing(&shapes, Point::new(10.8, 10.2)), vec![3]);
    assert!(shapes_containing(&shapes, Point::new(-5.0, -5.0)).is_empty());
}

#[test]
fn test_empty_scene() {
    assert!(overlapping_pairs(&[]).is_empty());
    assert!(overlapping_indices(&[]).is_empty());
}
