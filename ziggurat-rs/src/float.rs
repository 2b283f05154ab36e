//! Float widths the ziggurat sampler can produce.
//!
//! Each width carries its own strip table and its own way of splitting one
//! engine word into a strip index and a signed fraction, so `f32` and `f64`
//! never share a table.

use core::fmt::{Debug, Display};
use core::str::FromStr;

use num_traits::Float;
use rand::{Rng, RngCore};

use crate::tables::normal::{NORMAL_F32, NORMAL_F64};

mod private {
    pub trait Sealed {}
}

/// A floating-point type with a compiled-in normal strip table.
pub trait ZigguratFloat:
    Float + Debug + Display + FromStr + Send + Sync + private::Sealed + 'static
{
    /// Number of low word bits that select a strip.
    const TABLE_BITS: u32;

    /// Number of strips, `1 << TABLE_BITS`.
    const STRIPS: usize = 1 << Self::TABLE_BITS;

    /// The strip table, `STRIPS + 1` entries.
    fn table() -> &'static [Self];

    /// Draw a strip index in `[0, STRIPS)` and a fraction in `[-1, 1)` from a
    /// single engine word.
    fn draw_strip<R: RngCore + ?Sized>(rng: &mut R) -> (usize, Self);

    /// Uniform in `[0, 1)`.
    fn draw_uniform<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Unit-rate exponential.
    #[inline]
    fn draw_exp1<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        -(Self::one() - Self::draw_uniform(rng)).ln()
    }

    /// Unnormalised normal density, `exp(-x^2 / 2)`.
    fn gauss_kernel(self) -> Self;
}

macro_rules! ziggurat_float {
    ($ty:ty, $bits:expr, $table:ident, $word:ty, $signed:ty, $next:ident) => {
        impl private::Sealed for $ty {}

        impl ZigguratFloat for $ty {
            const TABLE_BITS: u32 = $bits;

            #[inline]
            fn table() -> &'static [Self] {
                &$table
            }

            #[inline]
            fn draw_strip<R: RngCore + ?Sized>(rng: &mut R) -> (usize, Self) {
                const MASK: $word = (1 << $bits) - 1;
                // The sign bit stays on top after the arithmetic shift
                const SCALE: $ty = 1.0 / (1u64 << (<$word>::BITS - 1 - $bits)) as $ty;

                let word = rng.$next();
                let strip = (word & MASK) as usize;
                let fraction = ((word as $signed) >> $bits) as $ty * SCALE;
                (strip, fraction)
            }

            #[inline]
            fn draw_uniform<R: RngCore + ?Sized>(rng: &mut R) -> Self {
                rng.random::<$ty>()
            }

            #[inline]
            fn gauss_kernel(self) -> Self {
                (-0.5 * self * self).exp()
            }
        }
    };
}

ziggurat_float!(f64, 7, NORMAL_F64, u64, i64, next_u64);
ziggurat_float!(f32, 6, NORMAL_F32, u32, i32, next_u32);
