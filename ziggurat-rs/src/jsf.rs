//! Jenkins small fast (JSF) PRNG
//!
//! By Bob Jenkins, http://burtleburtle.net/bob/rand/smallprng.html. Public Domain.
//!
//! Cheap enough that the sampler, not the engine, dominates benchmarks. Not
//! suitable for anything cryptographic.

use core::fmt;
use core::str::FromStr;

use rand_core::{RngCore, SeedableRng, impls};

use crate::error::ParseStateError;

const FIXED_SEED: u32 = 0xf1ea5eed;
const INITIAL_ROUNDS: u32 = 20;

macro_rules! jsf_engine {
    ($(#[$doc:meta])* $name:ident, $word:ty, $r1:expr, $r2:expr, $r3:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            a: $word,
            b: $word,
            c: $word,
            d: $word,
        }

        impl $name {
            /// Create a generator from a seed word
            pub fn new(seed: $word) -> Self {
                let mut rng = Self {
                    a: FIXED_SEED as $word,
                    b: seed,
                    c: seed,
                    d: seed,
                };
                rng.discard(INITIAL_ROUNDS as u64);
                rng
            }

            /// Advance the state by `n` steps
            pub fn discard(&mut self, n: u64) {
                for _ in 0..n {
                    self.step();
                }
            }

            #[inline]
            fn step(&mut self) -> $word {
                let e = self.a.wrapping_sub(self.b.rotate_left($r1));
                self.a = self.b ^ self.c.rotate_left($r2);
                self.b = self.c.wrapping_add(self.d.rotate_left($r3));
                self.c = self.d.wrapping_add(e);
                self.d = e.wrapping_add(self.a);
                self.d
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(0)
            }
        }

        impl SeedableRng for $name {
            type Seed = [u8; core::mem::size_of::<$word>()];

            fn from_seed(seed: Self::Seed) -> Self {
                Self::new(<$word>::from_le_bytes(seed))
            }
        }

        /// State as four whitespace-separated words
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {} {} {}", self.a, self.b, self.c, self.d)
            }
        }

        impl FromStr for $name {
            type Err = ParseStateError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let mut words = [0 as $word; 4];
                let mut tokens = s.split_whitespace();
                for (index, word) in words.iter_mut().enumerate() {
                    let token = tokens.next().ok_or(ParseStateError::Missing(index))?;
                    *word = token.parse().map_err(|_| ParseStateError::Invalid {
                        index,
                        token: token.to_owned(),
                    })?;
                }
                if let Some(extra) = tokens.next() {
                    return Err(ParseStateError::Trailing(extra.to_owned()));
                }
                let [a, b, c, d] = words;
                Ok(Self { a, b, c, d })
            }
        }
    };
}

jsf_engine!(
    /// 64-bit JSF engine
    Jsf64,
    u64,
    39,
    11,
    0
);

jsf_engine!(
    /// 32-bit JSF engine
    Jsf32,
    u32,
    27,
    17,
    0
);

impl RngCore for Jsf64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl RngCore for Jsf32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    /// Two 32-bit steps, low word first
    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}
