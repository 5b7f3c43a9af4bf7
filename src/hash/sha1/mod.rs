//! SHA-1 style hash function.
//!
//! A Merkle–Damgård construction over 512-bit blocks with a 160-bit state
//! of five 32-bit words.
//!
//! - [`core`] handles padding, block splitting, the stateful accumulator and
//!   digest encoding.
//! - [`computations`] holds the round functions and the 80-round
//!   compression loop.
//!
//! ## Padding deviation
//!
//! Input whose length is already a multiple of 64 bytes is hashed **without
//! any padding**. Every other input receives standard SHA-1 padding and
//! therefore hashes to the standard SHA-1 digest. As a consequence the empty
//! input hashes to the initial state
//! `67452301efcdab8998badcfe10325476c3d2e1f0`, not to the FIPS 180-4 value.
//! The rule is kept for compatibility with existing digests.

pub mod computations;
pub mod core;

pub use self::core::{Sha1, Sha1Digest, compress, hash, pad, sha1};

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Digest size in bytes.
pub const DIGEST_SIZE: usize = 20;

/// Initial hash value H0..H4.
pub const H160_INIT: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Round constants, one per group of 20 rounds.
pub const K160: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];
