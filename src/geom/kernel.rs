// src/geom/kernel.rs
// Tangent construction, segment/circle intersection and arc measurement.
// These are pure functions; all simulation state lives elsewhere.

use std::f64::consts::PI;

use crate::geom::{GeometryError, Obstacle, Point2D};
use crate::utils::clamp;

/// Default extension length for tangent rays. The rays exist only so a
/// rendering layer can build a visibility cone; planning never reads them.
pub const DEFAULT_RAY_LENGTH: f64 = 1000.0;

/// The two tangent points on the obstacle boundary reachable from an
/// external point, plus the corresponding rays extended from that point.
///
/// Point ordering is fixed: index 0 is the tangent at `angle - offset`,
/// index 1 the tangent at `angle + offset`, where `angle` is the external
/// point's polar angle around the obstacle center and
/// `offset = arccos(radius / distance)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentPair {
    pub points: [Point2D; 2],
    /// Each ray starts at the external point and runs through the matching
    /// tangent point, extended to the requested length.
    pub rays: [(Point2D, Point2D); 2],
}

/// Computes the tangent points and extended tangent rays from `point` to
/// the obstacle circle.
///
/// Fails with [`GeometryError::DegenerateGeometry`] when the point lies
/// inside or exactly on the circle; tangents are only defined strictly
/// outside it.
pub fn tangents_from_point(
    obstacle: &Obstacle,
    point: &Point2D,
    ray_length: f64,
) -> Result<TangentPair, GeometryError> {
    let diff_x = point.x - obstacle.center.x;
    let diff_y = point.y - obstacle.center.y;
    let distance = diff_x.hypot(diff_y);

    if distance <= obstacle.radius {
        return Err(GeometryError::DegenerateGeometry {
            x: point.x,
            y: point.y,
        });
    }

    let angle_to_center = diff_y.atan2(diff_x);
    let angle_offset = (obstacle.radius / distance).acos();
    let angles = [angle_to_center - angle_offset, angle_to_center + angle_offset];

    let points = angles.map(|a| obstacle.point_at_angle(a));
    let rays = points.map(|tangent_point| {
        let direction = point.vector_to(&tangent_point).normalize();
        (*point, point.offset(&direction.scale(ray_length)))
    });

    Ok(TangentPair { points, rays })
}

/// Whether the straight segment `p1..p2` crosses the obstacle's interior.
///
/// Intersection is strict: a segment exactly tangent to the circle (closest
/// distance equal to the radius) does NOT count as intersecting, so the
/// dense grid sweep stays exception-free on boundary-grazing cells.
pub fn segment_intersects_circle(p1: &Point2D, p2: &Point2D, obstacle: &Obstacle) -> bool {
    let diff_x = p2.x - p1.x;
    let diff_y = p2.y - p1.y;
    let len_sq = diff_x * diff_x + diff_y * diff_y;

    // Zero-length segment: the "segment" is a single point.
    if len_sq == 0.0 {
        return p1.distance_to(&obstacle.center) < obstacle.radius;
    }

    // Perpendicular distance from the center to the infinite line
    // ax + by + c = 0 through p1 and p2.
    let a = diff_y;
    let b = -diff_x;
    let c = diff_x * p1.y - diff_y * p1.x;
    let line_distance =
        (a * obstacle.center.x + b * obstacle.center.y + c).abs() / (a * a + b * b).sqrt();

    if line_distance > obstacle.radius {
        return false;
    }

    // Project the center onto the segment, clamped to its endpoints.
    let dot = (obstacle.center.x - p1.x) * diff_x + (obstacle.center.y - p1.y) * diff_y;
    let param = clamp(dot / len_sq, 0.0, 1.0);
    let closest = Point2D::new(p1.x + param * diff_x, p1.y + param * diff_y);

    closest.distance_to(&obstacle.center) < obstacle.radius
}

/// Length of the minor arc between two points on the obstacle boundary.
///
/// The angle comes from the arccos of the normalized dot product, clamped
/// to [-1, 1] to absorb floating error; the result is always the shorter of
/// the two possible arcs. Assumes both points lie on the boundary.
pub fn arc_length(obstacle: &Obstacle, p1: &Point2D, p2: &Point2D) -> f64 {
    let v1 = obstacle.center.vector_to(p1);
    let v2 = obstacle.center.vector_to(p2);
    let cosine = clamp(v1.dot(&v2) / (obstacle.radius * obstacle.radius), -1.0, 1.0);
    let angle = cosine.acos();
    obstacle.radius * angle.min(2.0 * PI - angle)
}

/// Polar angle of `point` relative to `origin`, normalized to [0, 2π).
pub fn polar_angle(point: &Point2D, origin: &Point2D) -> f64 {
    let angle = (point.y - origin.y).atan2(point.x - origin.x);
    if angle < 0.0 {
        angle + 2.0 * PI
    } else {
        angle
    }
}
