// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Magnitude below which a vector is treated as zero length.
///
/// Applies to normalization and to the cross product of a quad's first three corners.
pub const DEGENERATE_EPSILON: Real = 1e-12;

/// A ray whose direction has `|d·n|` below this value is parallel to the plane.
pub const PARALLEL_EPSILON: Real = 1e-9;

/// If the world X axis has `|x·n|` above this, the local frame is seeded from Y instead.
pub const AXIS_ALIGNMENT_THRESHOLD: Real = 0.99;

/// Lazily-initialized relative tolerance used by the clipper and the polygon checks.
///
/// It is dimensionless: distances are compared against it times a polygon's
/// extent, areas against it times the squared extent.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `REFLECTRS_TOLERANCE` (e.g. `REFLECTRS_TOLERANCE=1e-7 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before the first query
///
/// The value is fixed by whichever happens first, the first [`tolerance`] read
/// or the first [`set_tolerance`] call, and never changes after that. Code that
/// needs a different value per call uses
/// [`intersect_convex_polygons_with_tolerance`](crate::clip::intersect_convex_polygons_with_tolerance)
/// and [`Polygon2D::validate_with_tolerance`](crate::polygon::Polygon2D::validate_with_tolerance).
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-5
    }
    #[cfg(feature = "f64")]
    {
        1e-9
    }
}

/// Returns the current comparison tolerance.
/// If not set yet, it tries `REFLECTRS_TOLERANCE` (parsed as the active `Real`) and
/// falls back to a sensible default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("REFLECTRS_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls, and calls after
/// the first [`tolerance`] read, are ignored).
/// Call near program start: `reflectrs::float_types::set_tolerance(1e-7);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}
