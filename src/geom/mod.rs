// src/geom/mod.rs
// Geometry kernel: points, the circular obstacle, and the tangent/arc
// primitives everything else is built from.

mod kernel;
mod obstacle;
mod point;

pub use kernel::{
    arc_length, polar_angle, segment_intersects_circle, tangents_from_point, TangentPair,
    DEFAULT_RAY_LENGTH,
};
pub use obstacle::Obstacle;
pub use point::{Point2D, Vector2D};

use thiserror::Error;

/// Errors produced by the geometry kernel and propagated by everything
/// downstream of it (planner, grid, agents).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A tangent or path computation was requested from a point inside or
    /// exactly on the obstacle circle. Tangents do not exist there.
    #[error("no tangents possible: point ({x}, {y}) is inside or on the obstacle")]
    DegenerateGeometry { x: f64, y: f64 },

    /// The configuration asked for an obstacle shape the kernel does not
    /// define geometry for. Only circles are supported.
    #[error("unsupported obstacle shape: {0:?}")]
    UnsupportedShape(String),
}
