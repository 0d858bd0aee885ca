//! Fixed-epsilon fuzzy comparisons.

/// Absolute tolerance for every geometric comparison in this crate.
pub const EPSILON: f64 = 1e-10;

#[inline]
pub fn fuzzy_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

#[inline]
pub fn fuzzy_zero(x: f64) -> bool {
    x.abs() <= EPSILON
}

/// `a <= b` allowing for `EPSILON` of rounding.
#[inline]
pub fn fuzzy_le(a: f64, b: f64) -> bool {
    a <= b + EPSILON
}

/// `t ∈ [0, 1]` allowing for `EPSILON` of rounding at both ends.
#[inline]
pub fn fuzzy_in_unit(t: f64) -> bool {
    fuzzy_le(0.0, t) && fuzzy_le(t, 1.0)
}
