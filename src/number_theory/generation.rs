//! Random prime and safe-prime generation.
//!
//! Candidates are drawn uniformly with the top and bottom bits forced to
//! one, so every candidate is odd and has exactly the requested bit length,
//! then filtered with Miller–Rabin. The search is a retry loop; to rule out
//! unbounded spinning on degenerate inputs every loop runs under the
//! attempt budget of a [`PrimeGenConfig`] and reports
//! [`NumberTheoryError::GenerationFailed`] once it is spent.

use super::NumberTheoryError;
use super::primality::miller_rabin_test_with;
use crate::primitives::BigUint;

use rand::RngCore;
use tracing::{debug, trace, warn};

/// Miller–Rabin rounds applied to accepted primes by default.
pub const DEFAULT_ROUNDS: usize = 128;

/// Default retry budget shared by all generation loops.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1_000_000;

/// Parameters for prime generation.
///
/// The attempt budget bounds the number of candidates drawn by one call.
/// For a `k`-bit prime about `0.35 * k` candidates are expected, and about
/// `0.12 * k²` for a `k`-bit safe prime, so the default leaves ample room
/// for common sizes while still guaranteeing termination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeGenConfig {
    /// Miller–Rabin rounds per candidate (minimum 1).
    pub rounds: usize,
    /// Maximum number of candidates to draw (minimum 1).
    pub max_attempts: u64,
}

impl PrimeGenConfig {
    pub(crate) fn validate(&self) -> Result<(), NumberTheoryError> {
        if self.rounds < 1 {
            return Err(NumberTheoryError::InvalidConfig("rounds must be at least 1"));
        }

        if self.max_attempts < 1 {
            return Err(NumberTheoryError::InvalidConfig(
                "max_attempts must be at least 1",
            ));
        }

        Ok(())
    }
}

impl Default for PrimeGenConfig {
    /// 128 Miller–Rabin rounds, one million attempts.
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Draws a random odd integer of exactly `bits` bits.
///
/// # Errors
///
/// - [`NumberTheoryError::BitLengthTooSmall`] if `bits` is zero
pub fn prime_candidate<R: RngCore + ?Sized>(
    rng: &mut R,
    bits: usize,
) -> Result<BigUint, NumberTheoryError> {
    if bits == 0 {
        return Err(NumberTheoryError::BitLengthTooSmall { bits, min: 1 });
    }

    let mut candidate = BigUint::random_bits(rng, bits);
    candidate.set_bit(bits - 1);
    candidate.set_bit(0);

    Ok(candidate)
}

/// Generates a probable prime of `bits` bits with the default parameters.
///
/// # Errors
///
/// See [`generate_prime_with`].
pub fn generate_prime(bits: usize) -> Result<BigUint, NumberTheoryError> {
    generate_prime_with(&mut rand::thread_rng(), bits, &PrimeGenConfig::default())
}

/// Generates a probable prime of exactly `bits` bits.
///
/// # Errors
///
/// - [`NumberTheoryError::BitLengthTooSmall`] if `bits < 2`
/// - [`NumberTheoryError::InvalidConfig`] if `config` is out of range
/// - [`NumberTheoryError::GenerationFailed`] if no prime was found within
///   `config.max_attempts` candidates
pub fn generate_prime_with<R: RngCore + ?Sized>(
    rng: &mut R,
    bits: usize,
    config: &PrimeGenConfig,
) -> Result<BigUint, NumberTheoryError> {
    config.validate()?;

    if bits < 2 {
        return Err(NumberTheoryError::BitLengthTooSmall { bits, min: 2 });
    }

    for attempt in 1..=config.max_attempts {
        let candidate = prime_candidate(rng, bits)?;

        if miller_rabin_test_with(rng, &candidate, config.rounds) {
            debug!(bits, attempts = attempt, "prime found");
            return Ok(candidate);
        }

        trace!(bits, attempt, "prime candidate rejected");
    }

    warn!(bits, attempts = config.max_attempts, "prime generation budget exhausted");

    Err(NumberTheoryError::GenerationFailed {
        attempts: config.max_attempts,
    })
}

/// Generates a safe prime of `bits` bits with the default parameters.
///
/// # Errors
///
/// See [`generate_safe_prime_with`].
pub fn generate_safe_prime(bits: usize) -> Result<BigUint, NumberTheoryError> {
    generate_safe_prime_with(&mut rand::thread_rng(), bits, &PrimeGenConfig::default())
}

/// Generates a safe prime `p = 2q + 1` of exactly `bits` bits, with `q`
/// prime as well.
///
/// `q` is drawn as a `bits - 1` bit candidate, so `p` has its top bit set.
/// The Sophie Germain factor is recovered with [`sophie_germain_factor`].
///
/// # Errors
///
/// - [`NumberTheoryError::BitLengthTooSmall`] if `bits < 3`
/// - [`NumberTheoryError::InvalidConfig`] if `config` is out of range
/// - [`NumberTheoryError::GenerationFailed`] if no safe prime was found
///   within `config.max_attempts` candidates
pub fn generate_safe_prime_with<R: RngCore + ?Sized>(
    rng: &mut R,
    bits: usize,
    config: &PrimeGenConfig,
) -> Result<BigUint, NumberTheoryError> {
    config.validate()?;

    if bits < 3 {
        return Err(NumberTheoryError::BitLengthTooSmall { bits, min: 3 });
    }

    for attempt in 1..=config.max_attempts {
        let q = prime_candidate(rng, bits - 1)?;
        let p = (&q << 1) + BigUint::one();

        if miller_rabin_test_with(rng, &q, config.rounds)
            && miller_rabin_test_with(rng, &p, config.rounds)
        {
            debug!(bits, attempts = attempt, "safe prime found");
            return Ok(p);
        }

        trace!(bits, attempt, "safe prime candidate rejected");
    }

    warn!(bits, attempts = config.max_attempts, "safe prime generation budget exhausted");

    Err(NumberTheoryError::GenerationFailed {
        attempts: config.max_attempts,
    })
}

/// Returns `q = (p - 1) / 2` for a safe prime `p`.
pub fn sophie_germain_factor(p: &BigUint) -> BigUint {
    p >> 1
}

/// Finds a generator of the multiplicative group of the safe prime `p`,
/// using the default parameters.
///
/// # Errors
///
/// See [`find_safe_prime_generator_with`].
pub fn find_safe_prime_generator(p: &BigUint, q: &BigUint) -> Result<BigUint, NumberTheoryError> {
    find_safe_prime_generator_with(&mut rand::thread_rng(), p, q, &PrimeGenConfig::default())
}

/// Finds a generator of `(Z/pZ)*` where `p = 2q + 1`.
///
/// The group has order `2q`, so an element generates it exactly when it
/// lies in neither proper subgroup: `a^((p-1)/2) != 1` (not a quadratic
/// residue) and `a^((p-1)/q) != 1` (not of order 1 or 2). Candidates are
/// sampled uniformly from `[0, p)`; zero is skipped since it is not a group
/// element.
///
/// # Errors
///
/// - [`NumberTheoryError::NotSafePrime`] if `q < 2` or `p != 2q + 1`
/// - [`NumberTheoryError::InvalidConfig`] if `config` is out of range
/// - [`NumberTheoryError::GenerationFailed`] if no generator was found
///   within `config.max_attempts` samples
pub fn find_safe_prime_generator_with<R: RngCore + ?Sized>(
    rng: &mut R,
    p: &BigUint,
    q: &BigUint,
    config: &PrimeGenConfig,
) -> Result<BigUint, NumberTheoryError> {
    config.validate()?;

    if *q < BigUint::from(2u8) || *p != (q << 1) + BigUint::one() {
        return Err(NumberTheoryError::NotSafePrime {
            p: p.clone(),
            q: q.clone(),
        });
    }

    let one = BigUint::one();
    let p_minus_one = p - &one;
    let half_order = &p_minus_one >> 1;
    let cofactor = &p_minus_one / q;

    for attempt in 1..=config.max_attempts {
        let a = BigUint::random_below(rng, p);

        if a.is_zero() {
            continue;
        }

        if a.modpow(&half_order, p) != one && a.modpow(&cofactor, p) != one {
            debug!(attempts = attempt, "safe prime group generator found");
            return Ok(a);
        }
    }

    warn!(attempts = config.max_attempts, "generator search budget exhausted");

    Err(NumberTheoryError::GenerationFailed {
        attempts: config.max_attempts,
    })
}
