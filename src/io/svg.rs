//! Draw an [`OverlapReport`] as SVG.
//!
//! The target polygon, the cast reflector footprint and their overlap are
//! filled on one equal-aspect view box in the target plane's local frame, local
//! `+y` pointing up. Polygons with fewer than three vertices are skipped.

use crate::float_types::Real;
use crate::overlap::OverlapReport;
use crate::polygon::Polygon2D;
use svg::Document;
use svg::node::element::{Group, Polygon};

const TARGET_FILL: &str = "blue";
const PROJECTED_FILL: &str = "green";
const INTERSECTION_FILL: &str = "red";

impl OverlapReport {
    /// Render the three polygons, see the module docs.
    pub fn to_svg(&self) -> String {
        let layers = [
            ("target", &self.target_polygon, TARGET_FILL, 0.3),
            ("projected", &self.projected_polygon, PROJECTED_FILL, 0.3),
            ("intersection", &self.intersection.polygon, INTERSECTION_FILL, 0.5),
        ];

        let drawable: Vec<_> = layers.iter().filter(|(_, poly, _, _)| poly.len() >= 3).collect();
        let (min_x, min_y, max_x, max_y) = bounds(drawable.iter().map(|(_, poly, _, _)| *poly));
        let margin = 0.05 * (max_x - min_x).max(max_y - min_y).max(Real::EPSILON);
        let stroke = margin / 10.0;

        // flip y so the local frame reads the usual way up
        let mut group = Group::new().set("transform", "scale(1,-1)");
        for (name, poly, fill, opacity) in drawable {
            group = group.add(
                Polygon::new()
                    .set("id", *name)
                    .set("points", points_attr(poly))
                    .set("fill", *fill)
                    .set("fill-opacity", *opacity)
                    .set("stroke", *fill)
                    .set("stroke-width", stroke),
            );
        }

        Document::new()
            .set(
                "viewBox",
                (
                    min_x - margin,
                    -max_y - margin,
                    max_x - min_x + 2.0 * margin,
                    max_y - min_y + 2.0 * margin,
                ),
            )
            .set("preserveAspectRatio", "xMidYMid meet")
            .add(group)
            .to_string()
    }
}

fn points_attr(poly: &Polygon2D) -> String {
    poly.vertices
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `(min_x, min_y, max_x, max_y)` over all vertices; a unit box when there are none.
fn bounds<'a>(polys: impl Iterator<Item = &'a Polygon2D>) -> (Real, Real, Real, Real) {
    let mut vertices = polys.flat_map(|poly| poly.vertices.iter()).peekable();
    if vertices.peek().is_none() {
        return (0.0, 0.0, 1.0, 1.0);
    }
    vertices.fold(
        (Real::MAX, Real::MAX, Real::MIN, Real::MIN),
        |(min_x, min_y, max_x, max_y), p| (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y)),
    )
}
