//! Where does the light reflected off a flat **heliostat** land on a flat **receiver**?
//!
//! Given a planar quadrilateral reflector lit by a parallel beam, and a planar
//! quadrilateral target, `reflectrs` computes the illuminated part of the target
//! and its area by chaining
//! [specular reflection](reflection), [ray/plane intersection](plane),
//! [projection](projection) into a [local 2D frame](frame) of the target, and
//! [convex polygon clipping](clip).
//!
//! ```
//! use nalgebra::Vector3;
//! use reflectrs::{Quad3, compute_overlap};
//!
//! // a mirror facing straight up, a target plane 10 units above it
//! let mirror = Quad3::from_arrays([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]]);
//! let target = Quad3::from_arrays([[0.0, 0.0, 10.0], [2.0, 0.0, 10.0], [2.0, 2.0, 10.0], [0.0, 2.0, 10.0]]);
//!
//! let hit = compute_overlap(&mirror, &target, &Vector3::new(0.0, 0.0, -1.0)).unwrap();
//! assert!((hit.area - 1.0).abs() < 1e-9);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: render an [`OverlapReport`] as SVG
//! - **json-io**: read and write [`Scene`]s as JSON
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod clip;
pub mod errors;
pub mod float_types;
pub mod frame;
pub mod io;
pub mod overlap;
pub mod plane;
pub mod polygon;
pub mod projection;
pub mod quad;
pub mod reflection;
pub mod scene;
pub mod vector;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use clip::{
    IntersectionResult, intersect_convex_polygons, intersect_convex_polygons_with_tolerance,
    try_intersect_convex_polygons,
};
pub use errors::{GeometryError, PolygonDefect};
pub use frame::{LocalFrame2D, build_local_frame, to_local_2d};
pub use overlap::{OverlapReport, compute_overlap, compute_overlap_report};
pub use plane::{Plane, Ray, plane_from_quad, ray_plane_intersection};
pub use polygon::Polygon2D;
pub use projection::project_quad_through_direction;
pub use quad::Quad3;
pub use reflection::reflect;
pub use scene::Scene;
