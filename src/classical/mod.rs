//! Classical ciphers.
//!
//! Small historical ciphers kept alongside the modern primitives, mostly
//! as consumers of the number-theory layer:
//!
//! - [`vernam`]: one-time-pad XOR
//! - [`substitution`]: monoalphabetic substitution
//! - [`affine`]: affine cipher over blocks of two letters (modulo 26²)
//!
//! None of these offer any security against a modern adversary.

pub mod affine;
pub mod substitution;
pub mod vernam;

pub use affine::{affine_block_decrypt, affine_block_encrypt};
pub use substitution::monoalphabetic_substitution;
pub use vernam::vernam;

use thiserror::Error;

/// Errors that may occur in the classical ciphers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassicalCipherError {
    /// The one-time pad is shorter than the message.
    #[error("key of {key} bytes is shorter than the {message}-byte message")]
    KeyTooShort { key: usize, message: usize },

    /// The two substitution alphabets differ in length.
    #[error("alphabets differ in length: {plain} vs {cipher}")]
    AlphabetMismatch { plain: usize, cipher: usize },

    /// A character is not part of the expected alphabet.
    #[error("character {0:?} is outside the alphabet")]
    InvalidCharacter(char),

    /// A block cipher input does not split into whole blocks.
    #[error("input length {0} is not a multiple of the block size")]
    OddLength(usize),

    /// The affine multiplier has no inverse modulo 676.
    #[error("multiplier {0} is not invertible modulo 676")]
    NonInvertibleMultiplier(u64),
}
