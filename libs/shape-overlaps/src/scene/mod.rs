//! # Scene Queries
//!
//! Batch queries over a collection of shapes, as used by an inspection tool
//! to highlight every overlapping shape at once.
//!
//! Each pair is independent, so the work is spread over the `rayon` thread
//! pool. Bounding boxes are computed once per call and reused for the
//! pairwise pre-filter. Results are always sorted by index.

use rayon::prelude::*;

use crate::config::KernelConfig;
use crate::core::bounds::BoundingBox;
use crate::core::point::Point;
use crate::overlap::overlaps_with;
use crate::shapes::Shape;

/// Index pairs `(i, j)` with `i < j` whose shapes overlap.
///
/// ## Example
///
/// ```rust
/// use shape_overlaps::scene::overlapping_pairs;
/// use shape_overlaps::{Circle, Point, Shape};
///
/// let shapes: Vec<Shape> = [(0.0, 1.0), (1.5, 1.0), (10.0, 1.0)]
///     .into_iter()
///     .map(|(x, r)| Circle::new(Point::new(x, 0.0), r).unwrap().into())
///     .collect();
///
/// assert_eq!(overlapping_pairs(&shapes), vec![(0, 1)]);
/// ```
pub fn overlapping_pairs(shapes: &[Shape]) -> Vec<(usize, usize)> {
    overlapping_pairs_with(shapes, &KernelConfig::default())
}

/// [`overlapping_pairs`] with an explicit configuration.
pub fn overlapping_pairs_with(shapes: &[Shape], config: &KernelConfig) -> Vec<(usize, usize)> {
    let boxes: Vec<BoundingBox> = shapes.par_iter().map(Shape::bounding_box).collect();
    let boxes = &boxes;
    let n = shapes.len();

    let mut pairs: Vec<(usize, usize)> = (0..n)
        .into_par_iter()
        .flat_map_iter(|i| {
            ((i + 1)..n)
                .filter(move |&j| {
                    boxes[i].overlaps(&boxes[j]) && overlaps_with(&shapes[i], &shapes[j], config)
                })
                .map(move |j| (i, j))
        })
        .collect();

    pairs.sort_unstable();
    log::debug!("{} overlapping pairs among {n} shapes", pairs.len());
    pairs
}

/// Indices of shapes that overlap at least one other shape.
pub fn overlapping_indices(shapes: &[Shape]) -> Vec<usize> {
    overlapping_indices_with(shapes, &KernelConfig::default())
}

/// [`overlapping_indices`] with an explicit configuration.
pub fn overlapping_indices_with(shapes: &[Shape], config: &KernelConfig) -> Vec<usize> {
    let mut flagged = vec![false; shapes.len()];
    for (i, j) in overlapping_pairs_with(shapes, config) {
        flagged[i] = true;
        flagged[j] = true;
    }

    flagged
        .iter()
        .enumerate()
        .filter_map(|(i, &hit)| hit.then_some(i))
        .collect()
}

/// Indices of shapes that contain `point`.
pub fn shapes_containing(shapes: &[Shape], point: Point) -> Vec<usize> {
    shapes
        .par_iter()
        .enumerate()
        .filter(|(_, shape)| shape.contains(point))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests;
