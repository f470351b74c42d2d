//! Convenient re-exports for downstream crates.

pub use crate::error::{Error, Result};
pub use crate::matcher::{resolve, KeyMatcher};
pub use crate::spec::{FilterList, FilterSpec};
