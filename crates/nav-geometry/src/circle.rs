use crate::Point2;

/// A circle given by its center and radius.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }
}
