//! Errors from parsing the text forms of parameters and engine state.
//!
//! Sampling itself never fails, so these are the only errors in the crate.

use thiserror::Error;

/// Failure to read a `"mean stddev"` pair
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseParamError {
    #[error("missing {0} field")]
    Missing(&'static str),

    #[error("invalid {field} field: {token:?}")]
    Invalid { field: &'static str, token: String },

    #[error("unexpected trailing input: {0:?}")]
    Trailing(String),
}

/// Failure to read an engine state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseStateError {
    #[error("missing state word {0}")]
    Missing(usize),

    #[error("invalid state word {index}: {token:?}")]
    Invalid { index: usize, token: String },

    #[error("unexpected trailing input: {0:?}")]
    Trailing(String),
}
