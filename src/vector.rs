//! Vector helpers on top of `nalgebra`.
//!
//! Addition, subtraction, scaling, dot and cross products are nalgebra's own
//! operators and methods. The one operation that can fail, normalization, is
//! wrapped here so a zero-length vector becomes a [`GeometryError`] instead of
//! a vector full of NaNs.

use crate::errors::GeometryError;
use crate::float_types::{DEGENERATE_EPSILON, Real};
use nalgebra::{Point2, Vector3};

/// Return `v / |v|`, or [`GeometryError::DegenerateVector`] when `|v| < DEGENERATE_EPSILON`.
pub fn normalize(v: &Vector3<Real>, context: &'static str) -> Result<Vector3<Real>, GeometryError> {
    let norm = v.norm();
    if !norm.is_finite() || norm < DEGENERATE_EPSILON {
        return Err(GeometryError::DegenerateVector { context });
    }
    Ok(v / norm)
}

/// Checked normalization as a method
pub trait CheckedNormalize: Sized {
    fn checked_normalize(&self, context: &'static str) -> Result<Self, GeometryError>;
}

impl CheckedNormalize for Vector3<Real> {
    #[inline]
    fn checked_normalize(&self, context: &'static str) -> Result<Self, GeometryError> {
        normalize(self, context)
    }
}

/// Linear interpolation between two 2D points, `a` at `t = 0` and `b` at `t = 1`.
#[inline]
pub fn lerp2(a: &Point2<Real>, b: &Point2<Real>, t: Real) -> Point2<Real> {
    a + (b - a) * t
}
