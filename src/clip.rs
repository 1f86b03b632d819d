//! Convex polygon intersection by Sutherland–Hodgman clipping.

use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use crate::polygon::Polygon2D;
use crate::vector::lerp2;
use log::trace;
use nalgebra::Point2;

/// The overlap of two polygons and its area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntersectionResult {
    /// Possibly empty. Winding is not guaranteed to match either input.
    pub polygon: Polygon2D,
    /// Absolute shoelace area of `polygon`
    pub area: Real,
}

impl IntersectionResult {
    pub const fn empty() -> Self {
        IntersectionResult {
            polygon: Polygon2D::empty(),
            area: 0.0,
        }
    }

    fn from_polygon(polygon: Polygon2D) -> Self {
        let area = polygon.area();
        IntersectionResult { polygon, area }
    }

    pub fn is_empty(&self) -> bool {
        self.polygon.is_empty()
    }
}

/// Intersect two convex polygons.
///
/// `a` is clipped successively against every edge of `b`. Either winding is
/// accepted for both inputs. If either has fewer than three vertices, or they
/// do not overlap, the result is empty with area 0. Touching polygons may yield
/// a zero-area sliver, which is a valid result.
///
/// Both polygons must be simple and convex; for other input the result is
/// unspecified. Use [`try_intersect_convex_polygons`] to have that checked.
///
/// Uses the crate-wide [`tolerance`], which is fixed at its first use.
pub fn intersect_convex_polygons(a: &Polygon2D, b: &Polygon2D) -> IntersectionResult {
    intersect_convex_polygons_with_tolerance(a, b, tolerance())
}

/// [`intersect_convex_polygons`] with an explicit relative tolerance.
///
/// A vertex counts as inside a clip edge when it lies no further outside than
/// `relative_tolerance` times the larger extent of the two polygons, so the
/// outcome does not change when both inputs are scaled together.
pub fn intersect_convex_polygons_with_tolerance(
    a: &Polygon2D,
    b: &Polygon2D,
    relative_tolerance: Real,
) -> IntersectionResult {
    if a.len() < 3 || b.len() < 3 {
        return IntersectionResult::empty();
    }

    // inside == left of each clip edge, which needs a counter-clockwise clipper
    let clipper = if b.signed_area() < 0.0 { b.reversed() } else { b.clone() };
    let eps = relative_tolerance * a.extent().max(b.extent());

    let mut subject = a.vertices.clone();
    for (edge_index, (start, end)) in clipper.edges().enumerate() {
        if subject.is_empty() {
            break;
        }
        subject = clip_against_edge(&subject, start, end, eps);
        trace!("clip edge {}: {} vertices remain", edge_index, subject.len());
    }

    dedup_ring(&mut subject, eps);
    IntersectionResult::from_polygon(Polygon2D::new(subject))
}

/// [`intersect_convex_polygons`] with both inputs validated first.
///
/// Returns [`GeometryError::InvalidPolygon`] if either input has fewer than
/// three vertices, a non-finite coordinate, zero area, or a reflex vertex.
pub fn try_intersect_convex_polygons(
    a: &Polygon2D,
    b: &Polygon2D,
) -> Result<IntersectionResult, GeometryError> {
    let relative_tolerance = tolerance();
    a.validate_with_tolerance(relative_tolerance)?;
    b.validate_with_tolerance(relative_tolerance)?;
    Ok(intersect_convex_polygons_with_tolerance(a, b, relative_tolerance))
}

/// Keep the part of `subject` on the left of the directed line `start -> end`.
///
/// Sides are signed distances to the line, so `eps` is a length.
fn clip_against_edge(
    subject: &[Point2<Real>],
    start: &Point2<Real>,
    end: &Point2<Real>,
    eps: Real,
) -> Vec<Point2<Real>> {
    let edge = end - start;
    let length = edge.norm();
    if length == 0.0 {
        // a repeated clipper vertex bounds nothing
        return subject.to_vec();
    }
    let side = |p: &Point2<Real>| edge.perp(&(p - start)) / length;

    let mut out = Vec::with_capacity(subject.len() + 1);
    let Some(mut prev) = subject.last() else {
        return out;
    };
    let mut prev_side = side(prev);

    for cur in subject {
        let cur_side = side(cur);
        let prev_inside = prev_side >= -eps;
        let cur_inside = cur_side >= -eps;

        if cur_inside {
            if !prev_inside {
                out.push(crossing(prev, cur, prev_side, cur_side));
            }
            out.push(*cur);
        } else if prev_inside {
            out.push(crossing(prev, cur, prev_side, cur_side));
        }

        prev = cur;
        prev_side = cur_side;
    }
    out
}

/// Where the segment `p -> q` crosses the clip line, given both signed sides.
#[inline]
fn crossing(p: &Point2<Real>, q: &Point2<Real>, p_side: Real, q_side: Real) -> Point2<Real> {
    let denom = p_side - q_side;
    if denom == 0.0 {
        return *p;
    }
    lerp2(p, q, p_side / denom)
}

/// Drop vertices that coincide with their predecessor, wrapping around.
fn dedup_ring(ring: &mut Vec<Point2<Real>>, eps: Real) {
    ring.dedup_by(|cur, prev| (*cur - *prev).norm() <= eps);
    while ring.len() > 1 && (ring[ring.len() - 1] - ring[0]).norm() <= eps {
        ring.pop();
    }
}
