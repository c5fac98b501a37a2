// src/agents/pursuer.rs

use log::debug;

use crate::geom::{
    polar_angle, segment_intersects_circle, tangents_from_point, GeometryError, Obstacle, Point2D,
    TangentPair, DEFAULT_RAY_LENGTH,
};

/// Absolute threshold below which the pursuer counts as sitting on the
/// obstacle boundary. Part of the public contract: boundary checks are
/// float-fragile, so an exact comparison is never used.
pub const EDGE_EPSILON: f64 = 1e-6;

/// The pursuing agent.
///
/// Keeps a cached tangent pair against its current position, both for the
/// occluded-chase step and for the rendering layer's visibility cone.
#[derive(Debug, Clone)]
pub struct Pursuer {
    position: Point2D,
    speed: f64,
    board_half_extent: f64,
    obstacle: Obstacle,
    trajectory: Vec<Point2D>,
    tangents: TangentPair,
}

impl Pursuer {
    /// Fails when the starting position lies inside or on the obstacle,
    /// since the tangent cache cannot be computed there.
    pub fn new(
        position: Point2D,
        speed: f64,
        board_half_extent: f64,
        obstacle: Obstacle,
    ) -> Result<Self, GeometryError> {
        let tangents = tangents_from_point(&obstacle, &position, DEFAULT_RAY_LENGTH)?;
        Ok(Pursuer {
            position,
            speed,
            board_half_extent,
            obstacle,
            trajectory: vec![position],
            tangents,
        })
    }

    /// Advances the pursuer by one step of length `speed` along the
    /// shortest-path heuristic.
    ///
    /// Visible evader: head straight for it. Occluded, strictly off the
    /// boundary: head for the cached second tangent point (a fixed side
    /// selection, not a proven-optimal one). Occluded on the boundary
    /// (within [`EDGE_EPSILON`]): ride the circumference counterclockwise
    /// by `speed / radius` radians. The step is rejected if it would leave
    /// the board; the tangent cache is refreshed afterwards whenever the
    /// new position admits tangents.
    pub fn step(&mut self, evader_position: &Point2D) -> Result<(), GeometryError> {
        let visible = !segment_intersects_circle(&self.position, evader_position, &self.obstacle);

        let candidate = if visible {
            let direction = self.position.vector_to(evader_position).normalize();
            self.position.offset(&direction.scale(self.speed))
        } else if self.obstacle.distance_from_edge(&self.position) > EDGE_EPSILON {
            if self.obstacle.contains(&self.position) {
                return Err(GeometryError::DegenerateGeometry {
                    x: self.position.x,
                    y: self.position.y,
                });
            }
            let target = self.tangents.points[1];
            let direction = self.position.vector_to(&target).normalize();
            self.position.offset(&direction.scale(self.speed))
        } else {
            // On the boundary: walk the arc, re-projected onto the circle.
            let angle = polar_angle(&self.position, &self.obstacle.center)
                + self.speed / self.obstacle.radius;
            debug!("pursuer riding the obstacle boundary, angle {angle:.4}");
            self.obstacle.point_at_angle(angle)
        };

        if candidate.within_bounds(self.board_half_extent) {
            self.position = candidate;
        }
        // A boundary-riding pursuer has no tangent pair; keep the stale one
        // until the next off-boundary position.
        if let Ok(tangents) = tangents_from_point(&self.obstacle, &self.position, DEFAULT_RAY_LENGTH)
        {
            self.tangents = tangents;
        }
        self.trajectory.push(self.position);
        Ok(())
    }

    pub fn position(&self) -> Point2D {
        self.position
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Every position the pursuer has occupied, oldest first.
    pub fn trajectory(&self) -> &[Point2D] {
        &self.trajectory
    }

    /// Tangent pair against the current (or last off-boundary) position.
    pub fn tangents(&self) -> &TangentPair {
        &self.tangents
    }
}

impl std::fmt::Display for Pursuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pursuer at {} with speed {}", self.position, self.speed)
    }
}
