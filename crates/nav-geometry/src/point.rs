//! Position / vector type for the Euclidean plane.
//!
//! `Point2` plays both roles: a location in the environment and the
//! displacement between two locations.  It uses `f64` throughout because the
//! navigation core compares crossing points and room boundaries exactly (up
//! to [`EPSILON`](crate::EPSILON)), and single precision loses too much at
//! building scale.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::tolerance::{fuzzy_eq, fuzzy_zero};

/// A point (or vector) in the plane.
///
/// `PartialEq` is exact bitwise float comparison; geometry code should use
/// [`fuzzy_eq`](Self::fuzzy_eq) instead.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Point2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3-D cross product `self × other`.
    ///
    /// Positive when `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Point2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn distance_to(self, other: Point2) -> f64 {
        (other - self).magnitude()
    }

    /// Equality up to [`EPSILON`](crate::EPSILON) on each coordinate.
    #[inline]
    pub fn fuzzy_eq(self, other: Point2) -> bool {
        fuzzy_eq(self.x, other.x) && fuzzy_eq(self.y, other.y)
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalized(self) -> Point2 {
        let m = self.magnitude();
        if fuzzy_zero(m) { Point2::ORIGIN } else { self / m }
    }

    /// Shrink the vector to `max_len` if it is longer, preserving direction.
    pub fn coerce_at_most(self, max_len: f64) -> Point2 {
        if self.magnitude() > max_len {
            self.normalized() * max_len
        } else {
            self
        }
    }
}

impl Add for Point2 {
    type Output = Point2;
    #[inline]
    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;
    #[inline]
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Point2;
    #[inline]
    fn mul(self, k: f64) -> Point2 {
        Point2::new(self.x * k, self.y * k)
    }
}

impl Div<f64> for Point2 {
    type Output = Point2;
    #[inline]
    fn div(self, k: f64) -> Point2 {
        Point2::new(self.x / k, self.y / k)
    }
}

impl Neg for Point2 {
    type Output = Point2;
    #[inline]
    fn neg(self) -> Point2 {
        Point2::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point2::new(x, y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
