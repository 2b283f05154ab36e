//! Standard normal density helpers in `f64`.
//!
//! These back the offline table generator and the table checks. The sampler
//! itself only needs the unnormalised kernel, see [`crate::ZigguratFloat`].

use crate::constants::{RECIPROCAL_GAUSS, RECIPROCAL_SQRT2, TAU};

/// Standard normal density at `x`.
#[inline]
pub fn density(x: f64) -> f64 {
    RECIPROCAL_GAUSS * (-x * x / 2.0).exp()
}

/// Inverse of [`density`] on the positive axis.
///
/// Only meaningful for `0 < p <= density(0)`.
#[inline]
pub fn inverse_density(p: f64) -> f64 {
    (-(TAU * p * p).ln()).sqrt()
}

/// Probability mass of the upper tail beyond `x`.
#[inline]
pub fn tail_mass(x: f64) -> f64 {
    libm::erfc(RECIPROCAL_SQRT2 * x) / 2.0
}

/// Standard normal cumulative distribution function.
#[inline]
pub fn cdf(x: f64) -> f64 {
    1.0 - tail_mass(x)
}
