//! Cryptographic primitives toolkit
//!
//! This crate provides small, self-contained implementations of classic
//! cryptographic building blocks and the number theory beneath public-key
//! constructions.
//!
//! The focus is on **clarity, predictability, and auditability**. Each
//! primitive is a plain function or an explicitly owned value; nothing in
//! the crate holds process-wide state.
//!
//! # Module overview
//!
//! - `primitives`
//!   Arbitrary-precision integers (`BigUint`, `BigInt`) used by the
//!   number-theory layer.
//!
//! - `stream`
//!   A configurable linear feedback shift register and an A5/1-style
//!   majority-clocked stream cipher built from three of them. Encryption
//!   and decryption are the same keystream XOR.
//!
//! - `hash`
//!   A SHA-1 style Merkle–Damgård hash producing 160-bit digests.
//!
//! - `block`
//!   The key schedule of a Threefish-style tweakable block cipher.
//!
//! - `number_theory`
//!   Extended Euclid and Bézout coefficients, modular inverse, Chinese
//!   Remainder Theorem, modular exponentiation, Fermat and Miller–Rabin
//!   tests, prime and safe-prime generation, and generator search.
//!
//! - `classical`
//!   Vernam, monoalphabetic substitution and digraph affine ciphers.
//!
//! # Deviations from the textbook algorithms
//!
//! Several edge-case rules are kept for compatibility with existing
//! outputs and are documented on the relevant modules:
//! - the hash skips padding for block-aligned input
//! - the stream cipher's majority vote resolves ties to `1`
//! - the block cipher key schedule truncates its mixed words to 8 bits
//!
//! This crate is not hardened against side channels and is not intended to
//! replace externally audited cryptographic libraries.
//!
//! # Logging
//!
//! Diagnostic events are emitted through `tracing`. The crate never installs
//! a subscriber.

pub mod block;
pub mod classical;
pub mod hash;
pub mod number_theory;
pub mod primitives;
pub mod stream;
