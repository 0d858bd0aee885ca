//! Slope / intercept description of an infinite line.

use crate::tolerance::fuzzy_zero;
use crate::{GeometryError, GeometryResult, Point2};

/// An infinite line through two distinct points.
///
/// The NaN-bearing fields are intentional and documented:
///
/// | Line kind   | `slope` | `y_intercept` | `x_intercept` |
/// |-------------|---------|---------------|---------------|
/// | vertical    | NaN     | NaN           | x of the line |
/// | horizontal  | 0       | y of the line | NaN           |
/// | oblique     | finite  | finite        | finite        |
#[derive(Copy, Clone, Debug)]
pub struct Line {
    pub slope:       f64,
    pub y_intercept: f64,
    pub x_intercept: f64,
}

impl Line {
    /// Line through `first` and `second`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateSegment`] if the two points coincide.
    pub fn through(first: Point2, second: Point2) -> GeometryResult<Line> {
        if first.fuzzy_eq(second) {
            return Err(GeometryError::DegenerateSegment(first));
        }
        let d = second - first;
        if fuzzy_zero(d.x) {
            return Ok(Line { slope: f64::NAN, y_intercept: f64::NAN, x_intercept: first.x });
        }
        let slope = d.y / d.x;
        let y_intercept = first.y - slope * first.x;
        let x_intercept = if fuzzy_zero(slope) { f64::NAN } else { -y_intercept / slope };
        Ok(Line { slope, y_intercept, x_intercept })
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.slope.is_nan()
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        fuzzy_zero(self.slope)
    }
}
