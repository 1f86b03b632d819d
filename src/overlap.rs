//! The end-to-end query: where does a reflector's reflected beam land on a target?
//!
//! Each call is independent and pure. The steps are
//!
//! 1. plane of the reflector, and the incident direction reflected off its normal
//! 2. plane of the target
//! 3. reflector corners cast along the reflected direction onto the target plane
//! 4. local 2D frame on the target plane; target corners and cast corners mapped into it
//! 5. convex intersection of the two 2D polygons

use crate::clip::{IntersectionResult, intersect_convex_polygons};
use crate::errors::GeometryError;
use crate::float_types::{DEGENERATE_EPSILON, Real};
use crate::frame::{LocalFrame2D, build_local_frame, to_local_2d};
use crate::plane::{Plane, plane_from_quad};
use crate::polygon::Polygon2D;
use crate::projection::project_quad_through_direction;
use crate::quad::Quad3;
use crate::reflection::reflect;
use log::debug;
use nalgebra::{Point3, Vector3};

/// Everything the pipeline computed for one query.
///
/// `target_polygon`, `projected_polygon` and `intersection` share the target
/// plane's local frame, so they can be drawn on one 2D axis.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapReport {
    pub reflected_direction: Vector3<Real>,
    pub reflector_plane: Plane,
    pub target_plane: Plane,
    pub frame: LocalFrame2D,
    /// Cast reflector corners in 3D; fewer than four if some rays missed
    pub projected_corners: Vec<Point3<Real>>,
    pub target_polygon: Polygon2D,
    pub projected_polygon: Polygon2D,
    pub intersection: IntersectionResult,
}

impl OverlapReport {
    /// Share of the cast reflector footprint that lands on the target, in `[0, 1]`.
    pub fn overlap_fraction(&self) -> Real {
        let projected = self.projected_polygon.area();
        if projected <= 0.0 {
            return 0.0;
        }
        (self.intersection.area / projected).clamp(0.0, 1.0)
    }

    /// The overlap lifted back onto the target plane in world coordinates.
    pub fn intersection_world(&self) -> Vec<Point3<Real>> {
        self.intersection
            .polygon
            .vertices
            .iter()
            .map(|p| self.frame.to_world(p))
            .collect()
    }
}

/// Area and shape of the overlap between the beam reflected off `reflector` and
/// the `target` quad, in the target plane's local frame.
///
/// Fails only with [`GeometryError::DegenerateVector`], when a quad's leading
/// corners are collinear or the incident direction has zero length. A beam
/// that misses the target is an empty result.
pub fn compute_overlap(
    reflector: &Quad3,
    target: &Quad3,
    incident_direction: &Vector3<Real>,
) -> Result<IntersectionResult, GeometryError> {
    compute_overlap_report(reflector, target, incident_direction).map(|report| report.intersection)
}

/// [`compute_overlap`] keeping every intermediate value.
pub fn compute_overlap_report(
    reflector: &Quad3,
    target: &Quad3,
    incident_direction: &Vector3<Real>,
) -> Result<OverlapReport, GeometryError> {
    let magnitude = incident_direction.norm();
    if !magnitude.is_finite() || magnitude < DEGENERATE_EPSILON {
        return Err(GeometryError::DegenerateVector {
            context: "compute_overlap: incident direction",
        });
    }

    let reflector_plane = plane_from_quad(reflector)?;
    let reflected_direction = reflect(incident_direction, &reflector_plane.normal)?;
    debug!(
        "reflector normal {:?}, reflected direction {:?}",
        reflector_plane.normal, reflected_direction
    );

    let target_plane = plane_from_quad(target)?;
    let projected_corners = project_quad_through_direction(reflector, &reflected_direction, &target_plane);
    debug!("{} of 4 reflector corners reach the target plane", projected_corners.len());

    let frame = build_local_frame(&target_plane);
    let target_polygon = to_local_2d(&target.corners, &frame, &target_plane.point);
    let projected_polygon = to_local_2d(&projected_corners, &frame, &target_plane.point);

    let intersection = intersect_convex_polygons(&target_polygon, &projected_polygon);
    debug!(
        "target area {}, projected area {}, overlap area {}",
        target_polygon.area(),
        projected_polygon.area(),
        intersection.area
    );

    Ok(OverlapReport {
        reflected_direction,
        reflector_plane,
        target_plane,
        frame,
        projected_corners,
        target_polygon,
        projected_polygon,
        intersection,
    })
}
