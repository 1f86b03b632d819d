//! Four-cornered planar patches: reflectors and targets.

use crate::aabb::Aabb;
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::frame::LocalFrame2D;
use crate::plane::{Plane, plane_from_quad};
use crate::vector::normalize;
use nalgebra::{Point2, Point3};

/// A convex planar quadrilateral given by four ordered corners.
///
/// The winding decides the orientation of [`Quad3::plane`]: walking the
/// corners counter-clockwise when seen from the front makes the normal point
/// toward the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad3 {
    pub corners: [Point3<Real>; 4],
}

impl Quad3 {
    pub const fn new(corners: [Point3<Real>; 4]) -> Self {
        Quad3 { corners }
    }

    pub fn from_arrays(corners: [[Real; 3]; 4]) -> Self {
        Quad3 {
            corners: corners.map(|[x, y, z]| Point3::new(x, y, z)),
        }
    }

    /// A `width` x `height` rectangle centred on `origin`, facing `aim_point`.
    ///
    /// Corners are `(-w/2,-h/2), (w/2,-h/2), (w/2,h/2), (-w/2,h/2)` in the local
    /// frame of the aim direction, so [`Quad3::plane`] returns a normal pointing
    /// at `aim_point`.
    pub fn aimed_rectangle(
        origin: Point3<Real>,
        aim_point: Point3<Real>,
        width: Real,
        height: Real,
    ) -> Result<Self, GeometryError> {
        let normal = normalize(&(aim_point - origin), "Quad3::aimed_rectangle: aim direction")?;
        let frame = LocalFrame2D::new(&Plane { point: origin, normal });
        let (hw, hh) = (width / 2.0, height / 2.0);
        let local = [
            Point2::new(-hw, -hh),
            Point2::new(hw, -hh),
            Point2::new(hw, hh),
            Point2::new(-hw, hh),
        ];
        Ok(Quad3 {
            corners: local.map(|p| frame.to_world(&p)),
        })
    }

    #[inline]
    pub const fn corners(&self) -> &[Point3<Real>; 4] {
        &self.corners
    }

    pub fn plane(&self) -> Result<Plane, GeometryError> {
        plane_from_quad(self)
    }

    /// Area as the sum of the triangles (c0, c1, c2) and (c0, c2, c3).
    pub fn area(&self) -> Real {
        let [c0, c1, c2, c3] = self.corners;
        0.5 * ((c1 - c0).cross(&(c2 - c0)).norm() + (c2 - c0).cross(&(c3 - c0)).norm())
    }

    pub fn bounding_box(&self) -> Aabb {
        let [c0, c1, c2, c3] = self.corners;
        Aabb::new(c0.inf(&c1).inf(&c2).inf(&c3), c0.sup(&c1).sup(&c2).sup(&c3))
    }
}

impl From<[[Real; 3]; 4]> for Quad3 {
    fn from(corners: [[Real; 3]; 4]) -> Self {
        Quad3::from_arrays(corners)
    }
}
