//! Specular reflection of a direction off a planar surface.

use crate::errors::GeometryError;
use crate::float_types::{DEGENERATE_EPSILON, Real};
use crate::vector::normalize;
use nalgebra::Vector3;

/// Reflect `incident` about the surface with normal `normal`.
///
/// Uses `r = d - 2 (d·n / n·n) n`, so neither argument has to be unit length.
/// The result has the same magnitude as `incident`.
///
/// Fails with [`GeometryError::DegenerateVector`] if `n·n` is (numerically) zero.
///
/// ```
/// # use reflectrs::reflection::reflect;
/// # use nalgebra::Vector3;
/// let r = reflect(&Vector3::new(1.0, -1.0, 0.0), &Vector3::new(0.0, 2.0, 0.0)).unwrap();
/// assert_eq!(r, Vector3::new(1.0, 1.0, 0.0));
/// ```
pub fn reflect(incident: &Vector3<Real>, normal: &Vector3<Real>) -> Result<Vector3<Real>, GeometryError> {
    let n_dot_n = normal.dot(normal);
    if !n_dot_n.is_finite() || n_dot_n < DEGENERATE_EPSILON * DEGENERATE_EPSILON {
        return Err(GeometryError::DegenerateVector { context: "reflect: surface normal" });
    }
    let d_dot_n = incident.dot(normal);
    Ok(incident - normal * (2.0 * d_dot_n / n_dot_n))
}

/// Reflection as a method on direction vectors
pub trait Reflect {
    fn reflect_off(&self, normal: &Vector3<Real>) -> Result<Vector3<Real>, GeometryError>;
}

impl Reflect for Vector3<Real> {
    #[inline]
    fn reflect_off(&self, normal: &Vector3<Real>) -> Result<Vector3<Real>, GeometryError> {
        reflect(self, normal)
    }
}

/// Direction of travel of sunlight given a vector pointing *toward* the sun.
pub fn incident_from_sun(sun_vector: &Vector3<Real>) -> Result<Vector3<Real>, GeometryError> {
    normalize(&-sun_vector, "incident_from_sun: sun vector")
}
