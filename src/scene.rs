//! A single overlap query bundled as data.

use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::overlap::{OverlapReport, compute_overlap_report};
use crate::quad::Quad3;
use nalgebra::Vector3;

/// Reflector, target and incident beam direction of one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub reflector: Quad3,
    pub target: Quad3,
    pub incident: Vector3<Real>,
}

impl Scene {
    pub const fn new(reflector: Quad3, target: Quad3, incident: Vector3<Real>) -> Self {
        Scene { reflector, target, incident }
    }

    /// A tilted 1.92 m x 1.04 m heliostat south of the origin, sun slightly
    /// off zenith, and a 2 m x 2 m receiver tilted toward it about 10 m up.
    pub fn heliostat_example() -> Self {
        Scene {
            reflector: Quad3::from_arrays([
                [-4.041069770525555, 0.5206490038702324, -0.2263727198354415],
                [-4.041069770525555, -0.5208086614526061, -0.2263727198354415],
                [-5.958820461685046, -0.5208086614526061, 0.22634680717540345],
                [-5.958820461685046, 0.5206490038702324, 0.22634680717540345],
            ]),
            target: Quad3::from_arrays([
                [-1.0, -0.894427, 9.552786],
                [1.0, -0.894427, 9.552786],
                [1.0, 0.894427, 10.447214],
                [-1.0, 0.894427, 10.447214],
            ]),
            incident: Vector3::new(0.0, 0.09950373, -0.9950373),
        }
    }

    pub fn report(&self) -> Result<OverlapReport, GeometryError> {
        compute_overlap_report(&self.reflector, &self.target, &self.incident)
    }
}
