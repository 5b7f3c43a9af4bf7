//! A5/1-style clock-controlled stream cipher.
//!
//! Three LFSRs of lengths 19, 22 and 23 are loaded with a 64-bit key and
//! then clocked irregularly: on every step only the registers whose clocking
//! bit agrees with the majority vote are shifted. The keystream bit is the
//! XOR of the three output taps.
//!
//! ## Deviations from textbook A5/1
//!
//! - No frame number is mixed in and no warm-up bits are discarded; the
//!   keystream starts right after the 64 key-loading steps.
//! - The majority vote is `0` only when zeros strictly outnumber ones, so a
//!   tie (impossible with three voters, but kept for arbitrary layouts)
//!   resolves to `1`.
//!
//! Both rules are kept for compatibility with existing ciphertexts.

pub mod core;
pub mod key;

pub use self::core::{A51, RegisterLayout, R1, R2, R3, stream_cipher_run};
pub use self::key::Key;
