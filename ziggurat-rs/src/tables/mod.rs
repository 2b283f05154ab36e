//! Strip tables baked in from `zigtable` output

pub mod normal;
