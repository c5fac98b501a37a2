// src/geom/obstacle.rs

use serde::{Deserialize, Serialize};

use crate::geom::{GeometryError, Point2D};

/// The single circular obstacle shared (read-only) by the agents and the
/// isochrone grid. `Copy`, so every consumer owns its own value and no
/// default instance is ever aliased between simulations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub center: Point2D,
    pub radius: f64,
}

impl Obstacle {
    pub fn circle(center: Point2D, radius: f64) -> Self {
        Obstacle { center, radius }
    }

    /// Builds an obstacle from configuration values. The shape name is
    /// validated here: anything other than `"circle"` is a configuration
    /// error, not a geometry concern.
    pub fn from_config(center: Point2D, shape: &str, radius: f64) -> Result<Self, GeometryError> {
        if shape != "circle" {
            return Err(GeometryError::UnsupportedShape(shape.to_string()));
        }
        Ok(Obstacle::circle(center, radius))
    }

    /// True when the point lies inside the obstacle or on its boundary.
    /// This is the containment test the grid uses for its sentinel cells.
    pub fn contains(&self, point: &Point2D) -> bool {
        point.distance_to(&self.center) <= self.radius
    }

    /// Absolute distance between the point and the obstacle boundary.
    pub fn distance_from_edge(&self, point: &Point2D) -> f64 {
        (point.distance_to(&self.center) - self.radius).abs()
    }

    /// The boundary point at the given polar angle (radians, measured from
    /// the obstacle center).
    pub fn point_at_angle(&self, angle: f64) -> Point2D {
        Point2D::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

impl std::fmt::Display for Obstacle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Obstacle: center={}, radius={}", self.center, self.radius)
    }
}
