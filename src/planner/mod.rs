// src/planner/mod.rs
// Shortest obstacle-avoiding path between two points on the plane.

use crate::geom::{
    arc_length, segment_intersects_circle, tangents_from_point, GeometryError, Obstacle, Point2D,
    DEFAULT_RAY_LENGTH,
};

/// A computed route and its total length.
///
/// `waypoints` has two entries for a direct route, or four for a route that
/// detours via one tangent point on each end, with an implicit arc segment
/// between the two middle points.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub length: f64,
    pub waypoints: Vec<Point2D>,
}

/// Shortest path from `a` to `b` that does not cross the obstacle's
/// interior.
///
/// If the straight segment is clear, that segment is the answer. Otherwise
/// all four combinations of tangent points (two on each end) are costed as
/// straight-arc-straight routes and the cheapest one wins; ties keep the
/// first candidate encountered. Fails when either endpoint lies inside or
/// on the obstacle.
pub fn shortest_path(
    obstacle: &Obstacle,
    a: &Point2D,
    b: &Point2D,
) -> Result<PathResult, GeometryError> {
    if !segment_intersects_circle(a, b, obstacle) {
        return Ok(PathResult {
            length: a.distance_to(b),
            waypoints: vec![*a, *b],
        });
    }

    let tangents_a = tangents_from_point(obstacle, a, DEFAULT_RAY_LENGTH)?;
    let tangents_b = tangents_from_point(obstacle, b, DEFAULT_RAY_LENGTH)?;
    let [t1a, t1b] = tangents_a.points;
    let [t2a, t2b] = tangents_b.points;

    let candidates = [(t1a, t2a), (t1b, t2b), (t1a, t2b), (t1b, t2a)];

    let mut best = PathResult {
        length: f64::INFINITY,
        waypoints: Vec::new(),
    };
    for (ta, tb) in candidates {
        let length = a.distance_to(&ta) + b.distance_to(&tb) + arc_length(obstacle, &ta, &tb);
        if length < best.length {
            best = PathResult {
                length,
                waypoints: vec![*a, ta, tb, *b],
            };
        }
    }

    Ok(best)
}
