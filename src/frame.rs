//! Orthonormal 2D coordinates embedded in a 3D plane.

use crate::float_types::{AXIS_ALIGNMENT_THRESHOLD, Real};
use crate::plane::Plane;
use crate::polygon::Polygon2D;
use nalgebra::{Point2, Point3, Vector3};

/// An in-plane basis `(e1, e2)` anchored at the plane's reference point.
///
/// `e1`, `e2` and the plane normal form a right-handed orthonormal triple
/// (`e1 × e2 = normal`), so counter-clockwise in local coordinates is
/// counter-clockwise seen from the side the normal points to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame2D {
    pub origin: Point3<Real>,
    pub normal: Vector3<Real>,
    pub e1: Vector3<Real>,
    pub e2: Vector3<Real>,
}

impl LocalFrame2D {
    /// Build the frame of `plane`, see [`build_local_frame`].
    pub fn new(plane: &Plane) -> Self {
        build_local_frame(plane)
    }

    /// Local coordinates of `p` relative to the frame origin.
    #[inline]
    pub fn to_local(&self, p: &Point3<Real>) -> Point2<Real> {
        let rel = p - self.origin;
        Point2::new(rel.dot(&self.e1), rel.dot(&self.e2))
    }

    /// The point of the plane with local coordinates `p`.
    #[inline]
    pub fn to_world(&self, p: &Point2<Real>) -> Point3<Real> {
        self.origin + self.e1 * p.x + self.e2 * p.y
    }
}

/// Build a deterministic in-plane basis for `plane`.
///
/// The seed axis is world X unless `|x · normal| > 0.99`, in which case it is
/// world Y. Then `e1 = normalize(normal × seed)` and `e2 = normal × e1`.
///
/// `plane.normal` must be unit length, which [`Plane`]'s constructors ensure.
pub fn build_local_frame(plane: &Plane) -> LocalFrame2D {
    let normal = plane.normal;
    let seed = if normal.dot(&Vector3::x()).abs() > AXIS_ALIGNMENT_THRESHOLD {
        Vector3::y()
    } else {
        Vector3::x()
    };
    // |normal × seed| >= sqrt(1 - 0.99²) for either seed
    let e1 = normal.cross(&seed).normalize();
    let e2 = normal.cross(&e1);
    LocalFrame2D {
        origin: plane.point,
        normal,
        e1,
        e2,
    }
}

/// Map points lying on the frame's plane into local 2D coordinates relative to
/// `plane_point`.
///
/// No plane-membership check is made; any out-of-plane component is dropped.
pub fn to_local_2d(points: &[Point3<Real>], frame: &LocalFrame2D, plane_point: &Point3<Real>) -> Polygon2D {
    Polygon2D::new(
        points
            .iter()
            .map(|p| {
                let rel = p - plane_point;
                Point2::new(rel.dot(&frame.e1), rel.dot(&frame.e2))
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(normal: Vector3<Real>) -> Plane {
        Plane::new(Point3::new(1.0, 2.0, 3.0), normal).unwrap()
    }

    #[test]
    fn x_aligned_normal_seeds_from_y() {
        let frame = build_local_frame(&plane(Vector3::x()));
        // normal × y = z
        assert!((frame.e1 - Vector3::z()).norm() < 1e-12);
        assert!((frame.e2 - Vector3::x().cross(&Vector3::z())).norm() < 1e-12);
    }

    #[test]
    fn z_normal_seeds_from_x() {
        let frame = build_local_frame(&plane(Vector3::z()));
        // z × x = y, z × y = -x
        assert!((frame.e1 - Vector3::y()).norm() < 1e-12);
        assert!((frame.e2 + Vector3::x()).norm() < 1e-12);
    }

    #[test]
    fn threshold_is_strict() {
        // |x·n| == 0.99 exactly stays on the X seed
        let n = Vector3::new(0.99, (1.0 - 0.99 * 0.99 as Real).sqrt(), 0.0);
        let frame = build_local_frame(&Plane { point: Point3::origin(), normal: n });
        let expected = n.cross(&Vector3::x()).normalize();
        assert!((frame.e1 - expected).norm() < 1e-12);
    }

    #[test]
    fn local_world_round_trip() {
        let frame = build_local_frame(&plane(Vector3::new(0.3, -0.5, 0.8)));
        let local = Point2::new(-1.25, 4.5);
        let back = frame.to_local(&frame.to_world(&local));
        assert!((back - local).norm() < 1e-12);
    }

    #[test]
    fn plane_origin_maps_to_zero() {
        let p = plane(Vector3::new(1.0, 1.0, 1.0));
        let frame = build_local_frame(&p);
        let poly = to_local_2d(&[p.point], &frame, &p.point);
        assert_eq!(poly.vertices, vec![Point2::origin()]);
    }
}
