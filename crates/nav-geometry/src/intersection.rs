//! Result of intersecting two shapes.

use crate::Point2;

/// Classification of an intersection.
///
/// `MultiplePoints` holds the distinct intersection points (two for a chord
/// through a circle); `InfinitePoints` means collinear segments that overlap
/// over more than one point.
#[derive(Clone, Debug, PartialEq)]
pub enum Intersection {
    None,
    SinglePoint(Point2),
    MultiplePoints(Vec<Point2>),
    InfinitePoints,
}

impl Intersection {
    /// Collapse a set of already-deduplicated points into the matching variant.
    pub(crate) fn from_points(mut points: Vec<Point2>) -> Intersection {
        match points.len() {
            0 => Intersection::None,
            1 => Intersection::SinglePoint(points.remove(0)),
            _ => Intersection::MultiplePoints(points),
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Intersection::None)
    }

    /// The finite set of intersection points; empty for `None` and
    /// `InfinitePoints`.
    pub fn points(&self) -> &[Point2] {
        match self {
            Intersection::SinglePoint(p) => std::slice::from_ref(p),
            Intersection::MultiplePoints(ps) => ps,
            Intersection::None | Intersection::InfinitePoints => &[],
        }
    }
}
