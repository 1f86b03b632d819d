//! Planar polygons in local 2D coordinates.

use crate::errors::{GeometryError, PolygonDefect};
use crate::float_types::{Real, tolerance};
use nalgebra::Point2;

/// An ordered ring of 2D vertices, implicitly closed (last connects to first).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon2D {
    pub vertices: Vec<Point2<Real>>,
}

impl Polygon2D {
    pub const fn new(vertices: Vec<Point2<Real>>) -> Self {
        Polygon2D { vertices }
    }

    pub fn from_coords(coords: &[[Real; 2]]) -> Self {
        Polygon2D {
            vertices: coords.iter().map(|&[x, y]| Point2::new(x, y)).collect(),
        }
    }

    /// An empty polygon (no vertices, zero area)
    pub const fn empty() -> Self {
        Polygon2D { vertices: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate the closed ring's edges as `(start, end)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2<Real>, &Point2<Real>)> {
        self.vertices.iter().zip(self.vertices.iter().cycle().skip(1))
    }

    /// Shoelace area, positive for counter-clockwise winding.
    pub fn signed_area(&self) -> Real {
        if self.vertices.len() < 3 {
            return 0.0;
        }
        0.5 * self.edges().map(|(a, b)| a.x * b.y - b.x * a.y).sum::<Real>()
    }

    /// Shoelace area with the sign dropped.
    pub fn area(&self) -> Real {
        self.signed_area().abs()
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Larger side of the axis-aligned bounding box, 0 for fewer than two vertices.
    pub fn extent(&self) -> Real {
        let Some(first) = self.vertices.first() else {
            return 0.0;
        };
        let (mins, maxs) = self.vertices.iter().fold((*first, *first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        (maxs.x - mins.x).max(maxs.y - mins.y)
    }

    /// Same ring walked the other way
    pub fn reversed(&self) -> Self {
        Polygon2D {
            vertices: self.vertices.iter().rev().copied().collect(),
        }
    }

    /// Area centroid, or the vertex mean for a ring with no area.
    pub fn centroid(&self) -> Option<Point2<Real>> {
        if self.vertices.is_empty() {
            return None;
        }
        let a = self.signed_area();
        if a.abs() <= tolerance() * self.extent().powi(2) {
            let sum = self.vertices.iter().fold(nalgebra::Vector2::zeros(), |acc, p| acc + p.coords);
            return Some(Point2::from(sum / self.vertices.len() as Real));
        }
        let (cx, cy) = self.edges().fold((0.0, 0.0), |(cx, cy), (p, q)| {
            let cross = p.x * q.y - q.x * p.y;
            (cx + (p.x + q.x) * cross, cy + (p.y + q.y) * cross)
        });
        Some(Point2::new(cx / (6.0 * a), cy / (6.0 * a)))
    }

    /// True if every turn has the same sense (collinear vertices allowed).
    pub fn is_convex(&self) -> bool {
        self.first_reflex_vertex(tolerance()).is_none() && self.vertices.len() >= 3
    }

    /// A turn is reflex when its cross product, relative to the squared extent,
    /// goes against the ring's orientation by more than `relative_tolerance`.
    fn first_reflex_vertex(&self, relative_tolerance: Real) -> Option<Point2<Real>> {
        let n = self.vertices.len();
        if n < 3 {
            return None;
        }
        let orientation = self.signed_area().signum();
        let eps = relative_tolerance * self.extent().powi(2);
        (0..n).find_map(|i| {
            let prev = self.vertices[(i + n - 1) % n];
            let cur = self.vertices[i];
            let next = self.vertices[(i + 1) % n];
            let turn = (cur - prev).perp(&(next - cur));
            (turn * orientation < -eps).then_some(cur)
        })
    }

    /// Check the preconditions of convex clipping: at least three finite
    /// vertices, non-zero area, and no reflex turn.
    ///
    /// Area and turns are measured against the squared extent of the ring, so
    /// a valid polygon stays valid at any scale.
    pub fn validate(&self) -> Result<(), GeometryError> {
        self.validate_with_tolerance(tolerance())
    }

    /// [`Polygon2D::validate`] with an explicit relative tolerance.
    pub fn validate_with_tolerance(&self, relative_tolerance: Real) -> Result<(), GeometryError> {
        if self.vertices.len() < 3 {
            return Err(PolygonDefect::TooFewPoints(self.vertices.len()).into());
        }
        if let Some(p) = self.vertices.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(PolygonDefect::InvalidCoordinate(*p).into());
        }
        if self.area() <= relative_tolerance * self.extent().powi(2) {
            return Err(PolygonDefect::ZeroArea.into());
        }
        if let Some(p) = self.first_reflex_vertex(relative_tolerance) {
            return Err(PolygonDefect::NonConvex(p).into());
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl From<&Polygon2D> for geo::Polygon<Real> {
    fn from(polygon: &Polygon2D) -> Self {
        let ring: Vec<geo::Coord<Real>> = polygon
            .vertices
            .iter()
            .map(|p| geo::coord! { x: p.x, y: p.y })
            .collect();
        geo::Polygon::new(geo::LineString::new(ring), vec![])
    }
}

impl From<&geo::Polygon<Real>> for Polygon2D {
    fn from(polygon: &geo::Polygon<Real>) -> Self {
        let ring = polygon.exterior();
        // geo closes rings by repeating the first coordinate
        let open = if ring.is_closed() && ring.0.len() > 1 {
            &ring.0[..ring.0.len() - 1]
        } else {
            &ring.0[..]
        };
        Polygon2D {
            vertices: open.iter().map(|c| Point2::new(c.x, c.y)).collect(),
        }
    }
}
