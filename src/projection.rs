//! Casting a quad's corners along a fixed direction onto another plane.

use crate::float_types::Real;
use crate::plane::{Plane, ray_plane_intersection};
use crate::quad::Quad3;
use log::warn;
use nalgebra::{Point3, Vector3};

/// Intersect the line through each corner of `quad` along `direction` with
/// `target_plane`, in corner order.
///
/// Corners whose line runs parallel to the plane are skipped, so the result
/// can hold fewer than four points.
pub fn project_quad_through_direction(
    quad: &Quad3,
    direction: &Vector3<Real>,
    target_plane: &Plane,
) -> Vec<Point3<Real>> {
    project_points_through_direction(&quad.corners, direction, target_plane)
}

/// [`project_quad_through_direction`] for any list of points.
pub fn project_points_through_direction(
    points: &[Point3<Real>],
    direction: &Vector3<Real>,
    target_plane: &Plane,
) -> Vec<Point3<Real>> {
    points
        .iter()
        .enumerate()
        .filter_map(|(i, corner)| {
            let hit = ray_plane_intersection(corner, direction, target_plane);
            if hit.is_none() {
                warn!("corner {} runs parallel to the target plane and is dropped", i);
            }
            hit
        })
        .collect()
}
