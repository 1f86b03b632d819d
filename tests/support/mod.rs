//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::Vector3;
use reflectrs::{Polygon2D, Quad3, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn vec_approx_eq(a: &Vector3<Real>, b: &Vector3<Real>, eps: Real) -> bool {
    (a - b).norm() < eps
}

/// Axis-aligned square, counter-clockwise from its lower-left corner.
pub fn square(x0: Real, y0: Real, side: Real) -> Polygon2D {
    Polygon2D::from_coords(&[[x0, y0], [x0 + side, y0], [x0 + side, y0 + side], [x0, y0 + side]])
}

/// Horizontal `side` x `side` quad at height `z`, normal +Z.
pub fn horizontal_quad(x0: Real, y0: Real, z: Real, side: Real) -> Quad3 {
    Quad3::from_arrays([
        [x0, y0, z],
        [x0 + side, y0, z],
        [x0 + side, y0 + side, z],
        [x0, y0 + side, z],
    ])
}

/// A spread of directions that covers axis-aligned, diagonal and skewed cases.
pub fn sample_directions() -> Vec<Vector3<Real>> {
    vec![
        Vector3::x(),
        Vector3::y(),
        Vector3::z(),
        -Vector3::z(),
        Vector3::new(1.0, 1.0, 0.0),
        Vector3::new(0.3, -0.5, 0.8),
        Vector3::new(-2.0, 0.1, 0.4),
        Vector3::new(0.995, 0.0998, 0.0),
        Vector3::new(0.0, 0.09950373, -0.9950373),
        Vector3::new(5.0, -7.0, 3.0),
    ]
}
