//! Convex polygon — the shape of a navigation-graph room.
//!
//! Vertices are stored counter-clockwise.  Containment is boundary-inclusive,
//! so two rooms sharing an edge both contain the points on it; the
//! navigation state machine resolves that ambiguity, not the shape.

use std::f64::consts::TAU;

use crate::tolerance::{EPSILON, fuzzy_zero};
use crate::{GeometryError, GeometryResult, Point2, Segment};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvexPolygon {
    vertices: Vec<Point2>,
}

impl ConvexPolygon {
    /// Build a polygon from its vertices in either winding order.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::TooFewVertices`] for fewer than three vertices.
    /// - [`GeometryError::NotConvex`] for zero area, a reflex vertex, or a
    ///   self-intersecting (star-shaped) outline.
    pub fn new(mut vertices: Vec<Point2>) -> GeometryResult<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }
        let area = signed_area(&vertices);
        if fuzzy_zero(area) {
            return Err(GeometryError::NotConvex);
        }
        if area < 0.0 {
            vertices.reverse();
        }

        let n = vertices.len();
        let mut turning = 0.0;
        for i in 0..n {
            let e1 = vertices[(i + 1) % n] - vertices[i];
            let e2 = vertices[(i + 2) % n] - vertices[(i + 1) % n];
            let cross = e1.cross(e2);
            if cross < -EPSILON * e1.magnitude() * e2.magnitude() {
                return Err(GeometryError::NotConvex);
            }
            turning += cross.atan2(e1.dot(e2));
        }
        // A convex outline turns exactly once around.
        if (turning - TAU).abs() > 1e-6 {
            return Err(GeometryError::NotConvex);
        }
        Ok(Self { vertices })
    }

    /// Axis-aligned rectangle with lower-left corner `(x, y)`.
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> GeometryResult<Self> {
        Self::new(vec![
            Point2::new(x, y),
            Point2::new(x + width, y),
            Point2::new(x + width, y + height),
            Point2::new(x, y + height),
        ])
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Boundary edges in counter-clockwise order.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// Boundary-inclusive point containment.
    pub fn contains(&self, point: Point2) -> bool {
        self.edges().all(|edge| {
            let d = edge.to_vector();
            d.cross(point - edge.first) >= -EPSILON * d.magnitude()
        })
    }

    /// `true` if `point` lies on one of the edges.
    pub fn on_boundary(&self, point: Point2) -> bool {
        self.edges().any(|edge| edge.contains(point))
    }

    /// Area-weighted centroid.
    pub fn centroid(&self) -> Point2 {
        let n = self.vertices.len();
        let mut acc = Point2::ORIGIN;
        for i in 0..n {
            let (a, b) = (self.vertices[i], self.vertices[(i + 1) % n]);
            acc = acc + (a + b) * a.cross(b);
        }
        acc / (6.0 * self.area())
    }

    /// Axis-aligned bounding box as `(min, max)` corners.
    pub fn bounding_box(&self) -> (Point2, Point2) {
        let first = self.vertices[0];
        self.vertices.iter().skip(1).fold((first, first), |(lo, hi), v| {
            (
                Point2::new(lo.x.min(v.x), lo.y.min(v.y)),
                Point2::new(hi.x.max(v.x), hi.y.max(v.y)),
            )
        })
    }
}

/// Shoelace formula; positive for counter-clockwise outlines.
fn signed_area(vertices: &[Point2]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].cross(vertices[(i + 1) % n]))
        .sum::<f64>()
        * 0.5
}
