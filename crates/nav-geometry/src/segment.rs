//! Line segments and the exact predicates the navigation core relies on.
//!
//! # Parametrization
//!
//! A segment is `first + t * (second - first)` for `t ∈ [0, 1]`.  Projections,
//! containment, overlap, and both intersection routines work in this
//! parameter space; tolerances are applied in length units wherever a
//! parameter is compared against a distance.

use crate::tolerance::{fuzzy_eq, fuzzy_in_unit, fuzzy_le, fuzzy_zero};
use crate::{Circle, GeometryResult, Intersection, Line, Point2};

/// An immutable ordered pair of points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub first:  Point2,
    pub second: Point2,
}

impl Segment {
    #[inline]
    pub const fn new(first: Point2, second: Point2) -> Self {
        Self { first, second }
    }

    // ── Derived properties ────────────────────────────────────────────────

    /// Direction vector `second - first`.
    #[inline]
    pub fn to_vector(&self) -> Point2 {
        self.second - self.first
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.first.distance_to(self.second)
    }

    /// `true` iff both endpoints coincide (up to tolerance).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.first.fuzzy_eq(self.second)
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        fuzzy_eq(self.first.y, self.second.y)
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        fuzzy_eq(self.first.x, self.second.x)
    }

    #[inline]
    pub fn mid_point(&self) -> Point2 {
        (self.first + self.second) * 0.5
    }

    /// The point at parameter `t` (not clamped).
    #[inline]
    pub fn at(&self, t: f64) -> Point2 {
        self.first + self.to_vector() * t
    }

    /// The infinite line through this segment.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateSegment`](crate::GeometryError::DegenerateSegment)
    /// if the segment is a single point.
    pub fn to_line(&self) -> GeometryResult<Line> {
        Line::through(self.first, self.second)
    }

    // ── Distance ──────────────────────────────────────────────────────────

    /// Parameter of the orthogonal projection of `point`, unclamped.
    /// Must only be called on a non-degenerate segment.
    #[inline]
    fn project(&self, point: Point2) -> f64 {
        let d = self.to_vector();
        (point - self.first).dot(d) / d.magnitude_squared()
    }

    /// Orthogonal projection of `point` clamped to the segment.
    pub fn closest_point_to(&self, point: Point2) -> Point2 {
        if self.is_degenerate() {
            return self.first;
        }
        self.at(self.project(point).clamp(0.0, 1.0))
    }

    pub fn distance_to_point(&self, point: Point2) -> f64 {
        self.closest_point_to(point).distance_to(point)
    }

    /// Zero when the segments intersect, otherwise the smallest of the four
    /// endpoint-to-segment distances.
    pub fn distance_to_segment(&self, other: &Segment) -> f64 {
        if !self.intersect_segment(other).is_none() {
            return 0.0;
        }
        [
            self.distance_to_point(other.first),
            self.distance_to_point(other.second),
            other.distance_to_point(self.first),
            other.distance_to_point(self.second),
        ]
        .into_iter()
        .fold(f64::INFINITY, f64::min)
    }

    // ── Collinearity and containment ──────────────────────────────────────

    /// `true` if `point` lies on the infinite line through this segment.
    /// A degenerate segment is collinear with every point.
    pub fn is_collinear_with_point(&self, point: Point2) -> bool {
        if self.is_degenerate() {
            return true;
        }
        let d = self.to_vector();
        fuzzy_zero(d.cross(point - self.first) / d.magnitude())
    }

    /// `true` if both endpoints of `other` lie on this segment's line.
    ///
    /// When `self` is degenerate the roles swap: its single point must lie on
    /// `other`'s line.
    pub fn is_collinear_with_segment(&self, other: &Segment) -> bool {
        if self.is_degenerate() {
            return other.is_collinear_with_point(self.first);
        }
        self.is_collinear_with_point(other.first) && self.is_collinear_with_point(other.second)
    }

    /// `true` iff `point` is collinear and projects within `[0, 1]`,
    /// endpoints included.
    pub fn contains(&self, point: Point2) -> bool {
        if self.is_degenerate() {
            return self.first.fuzzy_eq(point);
        }
        self.is_collinear_with_point(point) && fuzzy_in_unit(self.project(point))
    }

    /// `true` iff the segments are collinear and share at least one point.
    pub fn overlaps_with(&self, other: &Segment) -> bool {
        self.is_collinear_with_segment(other) && self.collinear_overlap(other).is_some()
    }

    /// Overlap of a collinear `other` as a parameter interval `[lo, hi]` on
    /// the non-degenerate one of the two segments, plus that segment.
    fn collinear_overlap<'a>(&'a self, other: &'a Segment) -> Option<(&'a Segment, f64, f64)> {
        let (base, cmp) = if self.is_degenerate() { (other, self) } else { (self, other) };
        if base.is_degenerate() {
            return base.first.fuzzy_eq(cmp.first).then_some((base, 0.0, 0.0));
        }
        let (t0, t1) = (base.project(cmp.first), base.project(cmp.second));
        let lo = t0.min(t1).max(0.0);
        let hi = t0.max(t1).min(1.0);
        let len = base.length();
        fuzzy_le(lo * len, hi * len).then_some((base, lo, hi.max(lo)))
    }

    // ── Intersection ──────────────────────────────────────────────────────

    /// Intersect two segments.
    ///
    /// Solves `first + t·r = other.first + u·s` for `(t, u)`.  A vanishing
    /// determinant means parallel lines, resolved through collinearity and
    /// overlap: an overlap of positive length is `InfinitePoints`, a
    /// single shared point (including two coincident degenerate segments) is
    /// `SinglePoint`.
    pub fn intersect_segment(&self, other: &Segment) -> Intersection {
        let r = self.to_vector();
        let s = other.to_vector();
        let degenerate = self.is_degenerate() || other.is_degenerate();
        let denom = r.cross(s);

        if degenerate || fuzzy_zero(denom / (r.magnitude() * s.magnitude())) {
            if !self.is_collinear_with_segment(other) {
                return Intersection::None;
            }
            return match self.collinear_overlap(other) {
                None => Intersection::None,
                Some((base, lo, hi)) if fuzzy_zero((hi - lo) * base.length()) => {
                    Intersection::SinglePoint(base.at(lo))
                }
                Some(_) => Intersection::InfinitePoints,
            };
        }

        let qp = other.first - self.first;
        let t = qp.cross(s) / denom;
        let u = qp.cross(r) / denom;
        if fuzzy_in_unit(t) && fuzzy_in_unit(u) {
            Intersection::SinglePoint(self.at(t.clamp(0.0, 1.0)))
        } else {
            Intersection::None
        }
    }

    /// Intersect the segment with a circle's boundary.
    ///
    /// Substitutes the parametric form into `|p - c|² = r²` and solves the
    /// quadratic `a·t² + b·t + c = 0`, keeping the distinct roots in `[0, 1]`.
    pub fn intersect_circle(&self, circle: &Circle) -> Intersection {
        if self.is_degenerate() {
            return if fuzzy_eq(self.first.distance_to(circle.center), circle.radius) {
                Intersection::SinglePoint(self.first)
            } else {
                Intersection::None
            };
        }
        let d = self.to_vector();
        let f = self.first - circle.center;
        let a = d.dot(d);
        let b = 2.0 * f.dot(d);
        let c = f.dot(f) - circle.radius * circle.radius;
        let discriminant = b * b - 4.0 * a * c;
        let scale = (b * b).max(1.0);

        let roots: Vec<f64> = if discriminant.abs() <= crate::EPSILON * scale {
            vec![-b / (2.0 * a)]
        } else if discriminant < 0.0 {
            vec![]
        } else {
            let sq = discriminant.sqrt();
            vec![(-b - sq) / (2.0 * a), (-b + sq) / (2.0 * a)]
        };

        let mut points: Vec<Point2> = Vec::with_capacity(2);
        for t in roots.into_iter().filter(|&t| fuzzy_in_unit(t)) {
            let p = self.at(t.clamp(0.0, 1.0));
            if !points.iter().any(|q| q.fuzzy_eq(p)) {
                points.push(p);
            }
        }
        Intersection::from_points(points)
    }
}

impl From<(Point2, Point2)> for Segment {
    #[inline]
    fn from((first, second): (Point2, Point2)) -> Self {
        Segment::new(first, second)
    }
}
