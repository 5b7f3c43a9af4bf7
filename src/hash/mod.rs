//! Hash algorithms exposed by the crate.
//!
//! Currently includes a SHA-1 style hash with a pure-Rust implementation.

pub mod sha1;

/// Re-export of the SHA-1 convenience functions.
pub use sha1::core::{hash, sha1};
