//! Offline generator for the strip tables compiled into `ziggurat-rs`.
//!
//! Nothing here runs at sampling time. The output of [`emit::emit_rust`] is
//! pasted into `ziggurat-rs/src/tables/normal.rs`.

pub mod emit;
pub mod error;
pub mod generate;
pub mod rootfind;

pub use emit::{Width, emit_rust};
pub use error::TableError;
pub use generate::{GeneratorConfig, StripTable, build_table, generate};
