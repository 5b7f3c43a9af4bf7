//! Block cipher components.
//!
//! Currently provides the key schedule of a Threefish-style tweakable block
//! cipher.

pub mod threefish;

pub use threefish::{BlockSize, KeySchedule, KeyScheduleError, RoundKey, key_schedule};
