//! Constants for the normal density

pub use core::f64::consts::{FRAC_1_SQRT_2 as RECIPROCAL_SQRT2, TAU};

/// `1 / sqrt(2 * pi)`, the peak of the standard normal density.
pub const RECIPROCAL_GAUSS: f64 = 0.398_942_280_401_432_7;
