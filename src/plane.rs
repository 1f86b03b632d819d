//! Infinite planes and ray/plane intersection.

use crate::errors::GeometryError;
use crate::float_types::{PARALLEL_EPSILON, Real};
use crate::quad::Quad3;
use crate::vector::normalize;
use nalgebra::{Point3, Vector3};

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Point3<Real>,
    /// Always unit length
    pub normal: Vector3<Real>,
}

impl Plane {
    /// Create a plane, normalizing `normal`.
    pub fn new(point: Point3<Real>, normal: Vector3<Real>) -> Result<Self, GeometryError> {
        Ok(Plane {
            point,
            normal: normalize(&normal, "Plane::new: normal")?,
        })
    }

    /// Plane of a quad, see [`plane_from_quad`].
    pub fn from_quad(quad: &Quad3) -> Result<Self, GeometryError> {
        plane_from_quad(quad)
    }

    /// Distance of `p` from the plane, positive on the side the normal points to.
    #[inline]
    pub fn signed_distance(&self, p: &Point3<Real>) -> Real {
        (p - self.point).dot(&self.normal)
    }

    pub fn contains_point(&self, p: &Point3<Real>, tolerance: Real) -> bool {
        self.signed_distance(p).abs() <= tolerance
    }
}

/// The plane through a quad's first corner, with normal
/// `normalize((c1 - c0) × (c2 - c1))`.
///
/// Only the first three corners are used; the fourth is assumed coplanar.
/// Collinear leading corners give [`GeometryError::DegenerateVector`].
pub fn plane_from_quad(quad: &Quad3) -> Result<Plane, GeometryError> {
    let [c0, c1, c2, _] = quad.corners;
    let normal = (c1 - c0).cross(&(c2 - c1));
    Ok(Plane {
        point: c0,
        normal: normalize(&normal, "plane_from_quad: collinear corners")?,
    })
}

/// Point where the line `origin + t * direction` meets `plane`.
///
/// `t` may be negative; the line is infinite in both directions. Returns `None`
/// when `|direction · normal| < PARALLEL_EPSILON`, i.e. the ray runs parallel
/// to the plane. That is a normal outcome, not an error.
pub fn ray_plane_intersection(
    origin: &Point3<Real>,
    direction: &Vector3<Real>,
    plane: &Plane,
) -> Option<Point3<Real>> {
    let denom = direction.dot(&plane.normal);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = (plane.point - origin).dot(&plane.normal) / denom;
    Some(origin + direction * t)
}

/// Ray in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<Real>,
    pub direction: Vector3<Real>,
}

impl Ray {
    pub const fn new(origin: Point3<Real>, direction: Vector3<Real>) -> Self {
        Self { origin, direction }
    }

    pub fn intersect_plane(&self, plane: &Plane) -> Option<Point3<Real>> {
        ray_plane_intersection(&self.origin, &self.direction, plane)
    }
}
