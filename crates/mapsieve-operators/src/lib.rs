#![forbid(unsafe_code)]
//! mapsieve-operators: key-subtraction and merge over a `HashMap` wrapper.
//!
//! Design intent:
//! - Keep this crate pure and synchronous (no async, no I/O).
//! - One application routine owns the removal loop; the wrapper methods, the
//!   `KeyFilter` trait for plain maps, and the operator bindings all
//!   delegate to it.
//! - Operator syntax (`-`, `-=`, `+`, `+=`) is bound at compile time to the
//!   named functions, never by runtime aliasing.

pub mod filter;
pub mod map;
pub mod merge;
pub mod ops;

pub use filter::{KeyFilter, RemovalPredicate};
pub use map::SieveMap;
