//! # Ziggurat: Fast Normally Distributed Floats
//!
//! Standard normal and affine normal variates for `f32` and `f64` using the
//! ziggurat rejection method of Marsaglia and Tsang, with the strip layout of
//! Doornik's ZIGNOR and Marsaglia's tail algorithm.
//!
//! Each float width has its own strip table (128 strips for `f64`, 64 for
//! `f32`), generated offline by the `zigtable` tool and compiled in. Tables
//! are immutable statics, so samplers can be used from any number of threads
//! as long as each thread brings its own engine.
//!
//! ## Performance
//!
//! The common case costs one engine word, a table lookup, a multiply and a
//! compare. The tail and the wedges only come into play a few percent of the
//! time.
//!
//! ## Engines
//!
//! Any [`rand::RngCore`] works. 32-bit engines are widened through
//! `next_u64`, which is the caller's choice of composition. [`Jsf64`] and
//! [`Jsf32`] are bundled as cheap deterministic engines.

mod constants;
mod distribution;
mod error;
mod float;
pub mod gauss;
mod jsf;
mod normal;
pub mod tables;

pub use distribution::{Normal, Param};
pub use error::{ParseParamError, ParseStateError};
pub use float::ZigguratFloat;
pub use jsf::{Jsf32, Jsf64};
pub use normal::{StandardNormal, sample_standard, sample_tail};
