//! Table generation errors
//!
//! All of these are fatal for the generator: a table that did not converge
//! must never be emitted.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("table bits must be in 1..={max}, got {bits}")]
    InvalidBits { bits: u32, max: u32 },

    #[error("a table needs at least one strip")]
    NoStrips,

    #[error("bracket expansion factor must exceed 1, got {0}")]
    InvalidScale(f64),

    #[error("no sign change found around {seed} after {expansions} expansions")]
    NoBracket { seed: f64, expansions: usize },

    #[error("strips overflow the density peak at strip {strip} for edge {edge}")]
    Overflow { edge: f64, strip: usize },

    #[error("neither end of the converged bracket [{lo}, {hi}] builds a table")]
    NoConvergence { lo: f64, hi: f64 },
}
