use thiserror::Error;

use crate::Point2;

/// Errors produced by the geometric kernel.
///
/// These are expected, locally handled degeneracies, not navigation
/// invariant violations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("segment {0}-{0} is degenerate and does not define a line")]
    DegenerateSegment(Point2),

    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("polygon is not convex or has zero area")]
    NotConvex,
}

pub type GeometryResult<T> = Result<T, GeometryError>;
