//! Number-theory toolkit.
//!
//! This module supplies the arithmetic that public-key constructions are
//! built from. All functions are pure: they hold no internal state, and the
//! only source of non-determinism is the random generator a caller passes
//! to the `_with` variants (the plain variants use `rand::thread_rng`).
//!
//! - [`euclid`]  
//!   Greatest common divisors and Bézout coefficients (iterative extended
//!   Euclid).
//!
//! - [`modular`]  
//!   Modular exponentiation, modular inverse and the Chinese Remainder
//!   Theorem.
//!
//! - [`primality`]  
//!   Fermat and Miller–Rabin probabilistic primality tests.
//!
//! - [`generation`]  
//!   Random prime and safe-prime generation, and generator search in
//!   safe-prime groups. Every retry loop is bounded by a
//!   [`PrimeGenConfig`] budget.
//!
//! - [`elementary`]  
//!   Small-integer helpers on native `u64` values: trial division, sieve,
//!   factorization, Euler's totient and exhaustive generator search.
//!
//! Values that may be arbitrarily large use [`BigUint`](crate::primitives::BigUint);
//! Bézout coefficients use [`BigInt`](crate::primitives::BigInt).

pub mod elementary;
pub mod euclid;
pub mod generation;
pub mod modular;
pub mod primality;

pub use euclid::{are_coprime, bezout, extended_gcd, gcd, lcm};
pub use generation::{
    PrimeGenConfig, find_safe_prime_generator, generate_prime, generate_safe_prime,
};
pub use modular::{crt, mod_inverse, mod_pow};
pub use primality::{fermat_test, miller_rabin_test};

use crate::primitives::BigUint;

use thiserror::Error;

/// Errors that may occur during number-theory operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberTheoryError {
    /// A modulus of zero was supplied.
    #[error("modulus must be non-zero")]
    ZeroModulus,

    /// `value` and `modulus` are not coprime.
    #[error("{value} has no inverse modulo {modulus}")]
    NoInverse { value: BigUint, modulus: BigUint },

    /// The residue and modulus lists of a congruence system differ in length.
    #[error("congruence system has {values} residues but {moduli} moduli")]
    CongruenceMismatch { values: usize, moduli: usize },

    /// A congruence system without equations.
    #[error("congruence system is empty")]
    EmptySystem,

    /// The moduli of a congruence system are not pairwise coprime.
    #[error("modulus {modulus} is not coprime with the other moduli")]
    NonCoprimeModuli { modulus: BigUint },

    /// The requested bit length cannot hold a number of the requested kind.
    #[error("bit length {bits} is too small (minimum {min})")]
    BitLengthTooSmall { bits: usize, min: usize },

    /// `p` is not `2q + 1`.
    #[error("{p} is not 2 * {q} + 1")]
    NotSafePrime { p: BigUint, q: BigUint },

    /// A generation parameter is out of range.
    #[error("invalid generation parameters: {0}")]
    InvalidConfig(&'static str),

    /// A retry loop exhausted its budget.
    #[error("generation failed after {attempts} attempts")]
    GenerationFailed { attempts: u64 },
}
