#![forbid(unsafe_code)]
//! mapsieve-core: filter specs, matcher resolution, and errors.
//!
//! Responsibilities:
//! - Model the three key-removal rules as a closed sum type (`FilterSpec`).
//! - Normalize specs into key matchers once per application (`resolve`).
//! - Own the one fallible surface: pattern compilation at construction.
//!
//! **No map types, no I/O, no async** here. The `SieveMap` wrapper and the
//! application algorithm live in `mapsieve-operators`.

pub mod error;
pub mod matcher;
pub mod prelude;
pub mod spec;

pub use error::{Error, Result};
pub use matcher::{resolve, KeyMatcher};
pub use spec::{FilterList, FilterSpec};
