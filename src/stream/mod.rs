//! Stream ciphers built from linear feedback shift registers.
//!
//! - [`lfsr`] provides the configurable register.
//! - [`a51`] composes three registers with majority clock control into an
//!   A5/1-style keystream generator.
//!
//! Both encryption and decryption are a plain XOR with the keystream, so a
//! single `run` operation serves both directions.

pub mod a51;
pub mod lfsr;

use thiserror::Error;

pub use a51::{A51, Key, stream_cipher_run};
pub use lfsr::Lfsr;

/// Errors that may occur while configuring a stream cipher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamCipherError {
    /// The key does not have exactly 64 bits.
    #[error("invalid key length: expected {expected} bits, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// A textual key contains something other than `'0'` or `'1'`.
    #[error("invalid key digit {0:?}: expected '0' or '1'")]
    InvalidKeyDigit(char),

    /// A register layout is inconsistent.
    #[error("invalid register layout: {0}")]
    InvalidRegister(String),
}
