//! Regular polygon primitive.

use std::f64::consts::TAU;

use config::constants::MIN_POLYGON_SIDES;

use crate::core::point::{from_polar, Point};
use crate::error::{check_center, check_radius, check_rotation, ShapeError, ShapeResult};
use crate::shapes::Polygon;

/// Regular polygon inscribed in a circle of radius `radius`.
///
/// Vertex `i` sits at angle `2π i / sides + rotation`. The ring is computed
/// once in [`RegularPolygon::new`] and never changes afterwards.
///
/// ## Example
///
/// ```rust
/// use shape_overlaps::{Point, Polygon, RegularPolygon};
///
/// let hexagon = RegularPolygon::new(Point::new(0.0, 0.0), 2.0, 6, 0.0).unwrap();
/// assert_eq!(hexagon.vertices().len(), 6);
/// assert!(hexagon.contains(Point::new(1.0, 0.5)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon {
    center: Point,
    radius: f64,
    sides: u32,
    rotation: f64,
    vertices: Vec<Point>,
}

impl RegularPolygon {
    /// Creates a regular polygon and generates its vertex ring.
    ///
    /// # Errors
    ///
    /// Returns an error for fewer than three sides, a radius that is not a
    /// positive finite number, or a non-finite center or rotation.
    pub fn new(center: Point, radius: f64, sides: u32, rotation: f64) -> ShapeResult<Self> {
        check_center(center)?;
        check_radius(radius)?;
        check_rotation(rotation)?;
        if sides < MIN_POLYGON_SIDES {
            log::debug!("rejected regular polygon with {sides} sides");
            return Err(ShapeError::InvalidSides(sides));
        }

        let step = TAU / f64::from(sides);
        let vertices = (0..sides)
            .map(|i| center + from_polar(radius, step * f64::from(i) + rotation))
            .collect();

        Ok(Self {
            center,
            radius,
            sides,
            rotation,
            vertices,
        })
    }

    /// Center point.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Circumradius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Number of sides.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Rotation of the first vertex in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }
}

impl Polygon for RegularPolygon {
    fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}
