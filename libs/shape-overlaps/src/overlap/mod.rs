//! # Overlap Dispatch
//!
//! Routes an overlap query between two shapes to the right strategy. Every
//! pair goes through one function, keyed on the variant pair, so each
//! combination is decided in exactly one place and `overlaps(a, b)` always
//! equals `overlaps(b, a)`.
//!
//! ## Strategy Table
//!
//! | Pair              | Strategy                                               |
//! |-------------------|--------------------------------------------------------|
//! | polygon × polygon | SAT                                                    |
//! | polygon × circle  | center containment, then edge distance                 |
//! | circle × circle   | center distance against radius sum                     |
//! | polygon × ellipse | approximate ellipse, SAT                               |
//! | ellipse × ellipse | aligned: center distance < sum of semi-major axes;     |
//! |                   | rotated: approximate both, SAT                         |
//! | ellipse × circle  | aligned: analytic checks; otherwise approximate the    |
//! |                   | ellipse and use the polygon × circle path              |
//!
//! Every pair is rejected early when the bounding boxes are disjoint.
//!
//! The aligned ellipse × ellipse shortcut over-approximates: two eccentric
//! ellipses lined up along their minor axes can be reported as overlapping
//! while apart. The rotated path does not share that error.

use log::trace;

use crate::config::KernelConfig;
use crate::core::point::Point;
use crate::geometry::{point_in_polygon, point_segment_distance_squared, polygons_overlap};
use crate::shapes::{Circle, Ellipse, Polygon, Shape};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Returns `true` when the two shapes overlap, using the default
/// configuration.
///
/// ## Example
///
/// ```rust
/// use shape_overlaps::{overlaps, Point, RegularPolygon, Shape};
///
/// let square = |x: f64, y: f64| -> Shape {
///     RegularPolygon::new(Point::new(x, y), 2f64.sqrt() / 2.0, 4, std::f64::consts::FRAC_PI_4)
///         .unwrap()
///         .into()
/// };
/// assert!(overlaps(&square(0.0, 0.0), &square(0.5, 0.5)));
/// assert!(!overlaps(&square(0.0, 0.0), &square(2.0, 2.0)));
/// ```
pub fn overlaps(a: &Shape, b: &Shape) -> bool {
    overlaps_with(a, b, &KernelConfig::default())
}

/// Returns `true` when the two shapes overlap.
///
/// `config` supplies the tolerance used for degenerate edges and the
/// axis-alignment check, and the segment count for curved shapes.
pub fn overlaps_with(a: &Shape, b: &Shape, config: &KernelConfig) -> bool {
    if !a.bounding_box().overlaps(&b.bounding_box()) {
        trace!(
            "{} × {}: bounding boxes disjoint",
            a.shape_type(),
            b.shape_type()
        );
        return false;
    }

    match (Outline::of(a), Outline::of(b)) {
        (Outline::Polygon(first), Outline::Polygon(second)) => {
            trace!("polygon × polygon: SAT");
            polygons_overlap(first, second, config.tolerance)
        }
        (Outline::Circle(circle), Outline::Polygon(vertices))
        | (Outline::Polygon(vertices), Outline::Circle(circle)) => {
            circle_polygon_overlap(circle, vertices)
        }
        (Outline::Circle(first), Outline::Circle(second)) => circles_overlap(first, second),
        (Outline::Ellipse(ellipse), Outline::Polygon(vertices))
        | (Outline::Polygon(vertices), Outline::Ellipse(ellipse)) => {
            trace!("ellipse × polygon: approximation + SAT");
            let approximation = ellipse.approximation_vertices(config.approximation_segments);
            polygons_overlap(&approximation, vertices, config.tolerance)
        }
        (Outline::Ellipse(first), Outline::Ellipse(second)) => {
            ellipses_overlap(first, second, config)
        }
        (Outline::Ellipse(ellipse), Outline::Circle(circle))
        | (Outline::Circle(circle), Outline::Ellipse(ellipse)) => {
            ellipse_circle_overlap(ellipse, circle, config)
        }
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// How a shape takes part in dispatch.
///
/// Both polygon variants collapse into their vertex ring; curved shapes keep
/// their analytic form so cheaper tests stay available.
enum Outline<'a> {
    Polygon(&'a [Point]),
    Circle(&'a Circle),
    Ellipse(&'a Ellipse),
}

impl<'a> Outline<'a> {
    fn of(shape: &'a Shape) -> Self {
        match shape {
            Shape::RegularPolygon(p) => Outline::Polygon(p.vertices()),
            Shape::IrregularPolygon(p) => Outline::Polygon(p.vertices()),
            Shape::Circle(c) => Outline::Circle(c),
            Shape::Ellipse(e) => Outline::Ellipse(e),
        }
    }
}

// =============================================================================
// PAIR STRATEGIES
// =============================================================================

/// Closed test: circles that touch overlap.
fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    let reach = a.radius() + b.radius();
    a.center().distance_squared(b.center()) <= reach * reach
}

/// Circle against a vertex ring.
///
/// The circle reaches the polygon when its center is inside, or when some
/// edge passes within one radius of the center. An empty ring has no area.
fn circle_polygon_overlap(circle: &Circle, vertices: &[Point]) -> bool {
    if vertices.is_empty() {
        trace!("circle × polygon: empty ring");
        return false;
    }

    let center = circle.center();
    if point_in_polygon(center, vertices) {
        trace!("circle × polygon: center inside polygon");
        return true;
    }

    let radius_squared = circle.radius() * circle.radius();
    let n = vertices.len();
    (0..n).any(|i| {
        point_segment_distance_squared(center, vertices[i], vertices[(i + 1) % n])
            <= radius_squared
    })
}

fn ellipses_overlap(a: &Ellipse, b: &Ellipse, config: &KernelConfig) -> bool {
    if a.is_axis_aligned(config.tolerance) && b.is_axis_aligned(config.tolerance) {
        trace!("ellipse × ellipse: aligned center-distance shortcut");
        return a.center().distance(b.center()) < a.semi_major() + b.semi_major();
    }

    trace!("ellipse × ellipse: approximation + SAT");
    let segments = config.approximation_segments;
    polygons_overlap(
        &a.approximation_vertices(segments),
        &b.approximation_vertices(segments),
        config.tolerance,
    )
}

fn ellipse_circle_overlap(ellipse: &Ellipse, circle: &Circle, config: &KernelConfig) -> bool {
    if ellipse.is_axis_aligned(config.tolerance) {
        if ellipse.contains(circle.center()) {
            trace!("ellipse × circle: circle center inside ellipse");
            return true;
        }

        let radius = circle.radius();
        if radius >= ellipse.semi_major() && radius >= ellipse.semi_minor() {
            trace!("ellipse × circle: circle dominates both semi-axes");
            return circle.center().distance(ellipse.center()) <= radius;
        }
    }

    trace!("ellipse × circle: approximation + circle × polygon");
    let approximation = ellipse.approximation_vertices(config.approximation_segments);
    circle_polygon_overlap(circle, &approximation)
}
