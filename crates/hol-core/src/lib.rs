//! # hol-core
//!
//! Foundational building blocks shared by every crate in the workspace: the
//! error hierarchy, the `Result` alias, and the `ensure!` / `fail!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

pub use errors::{Error, Result};
