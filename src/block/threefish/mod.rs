//! Threefish-style tweakable block cipher key schedule.
//!
//! Round keys depend on the secret key and on a public 128-bit tweak. The
//! key is split into 64-bit words and extended with one parity word; the
//! two tweak words are extended with their sum. Each of the 20 round keys
//! then takes a rotating window over the extended key words, with the last
//! three words mixed with two tweak words and the round index.
//!
//! ## Narrow round-key words
//!
//! The three mixed words of every round key are truncated to their low
//! 8 bits after the addition. Production Threefish keeps the full 64-bit
//! sum. The truncation is most likely a scaled-down defect; it is kept so
//! schedules stay comparable with existing output. Do not rely on it for
//! security.

pub mod key_schedule;

pub use key_schedule::{BlockSize, C240, KeySchedule, ROUNDS, RoundKey, key_schedule};

use thiserror::Error;

/// Errors that may occur while building a key schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyScheduleError {
    /// The key length is not one of the supported block sizes.
    #[error("unsupported block size: {0} bytes (expected 32, 64 or 128)")]
    UnsupportedBlockSize(usize),

    /// A combined key-and-tweak buffer has the wrong length.
    #[error("invalid user key length: expected {expected} bytes, got {actual}")]
    InvalidUserKeyLength { expected: usize, actual: usize },
}
