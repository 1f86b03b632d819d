//! Geometry errors

use crate::float_types::Real;
use nalgebra::Point2;
use std::fmt::Display;

/// All the ways an input can be unusable for an overlap query
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A vector that must have a direction is (numerically) zero length.
    /// `context` names the operation that hit it.
    DegenerateVector { context: &'static str },
    /// A polygon handed to the checked intersection violates its preconditions
    InvalidPolygon(PolygonDefect),
    /// A scene description could not be turned into quads and a direction
    InvalidScene(String),
}

/// Why a [`Polygon2D`](crate::polygon::Polygon2D) was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum PolygonDefect {
    /// (TooFewPoints) fewer than three vertices
    TooFewPoints(usize),
    /// (InvalidCoordinate) a vertex has a NaN or infinite coordinate
    InvalidCoordinate(Point2<Real>),
    /// (NonConvex) the turn at this vertex disagrees with the polygon's winding
    NonConvex(Point2<Real>),
    /// (ZeroArea) all vertices are collinear or coincident
    ZeroArea,
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::DegenerateVector { context } => {
                write!(f, "(DegenerateVector) Near-zero vector in {}", context)
            },
            GeometryError::InvalidPolygon(defect) => write!(f, "(InvalidPolygon) {}", defect),
            GeometryError::InvalidScene(msg) => write!(f, "(InvalidScene) {}", msg),
        }
    }
}

impl Display for PolygonDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolygonDefect::TooFewPoints(n) => {
                write!(f, "(TooFewPoints) A polygon needs at least 3 vertices, got {}", n)
            },
            PolygonDefect::InvalidCoordinate(p) => {
                write!(f, "(InvalidCoordinate) The coordinate ({}) has a NaN or infinite", p)
            },
            PolygonDefect::NonConvex(p) => write!(f, "(NonConvex) Polygon is not convex at: {}", p),
            PolygonDefect::ZeroArea => write!(f, "(ZeroArea) Polygon vertices are collinear"),
        }
    }
}

impl From<PolygonDefect> for GeometryError {
    fn from(defect: PolygonDefect) -> Self {
        GeometryError::InvalidPolygon(defect)
    }
}
