//! Modular arithmetic: exponentiation, inverses and the Chinese Remainder
//! Theorem.

use super::NumberTheoryError;
use super::euclid::extended_gcd;
use crate::primitives::BigUint;

/// Computes `base^exp mod modulus` by square-and-multiply.
///
/// # Errors
///
/// Returns [`NumberTheoryError::ZeroModulus`] if `modulus` is zero.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> Result<BigUint, NumberTheoryError> {
    if modulus.is_zero() {
        return Err(NumberTheoryError::ZeroModulus);
    }

    Ok(base.modpow(exp, modulus))
}

/// Multiplicative inverse of `n` modulo `m`, normalized into `[0, m)`.
///
/// This is the `x` coefficient of `extended_gcd(n, m)`, reduced modulo `m`.
///
/// # Errors
///
/// - [`NumberTheoryError::ZeroModulus`] if `m` is zero
/// - [`NumberTheoryError::NoInverse`] if `gcd(n, m) != 1`
pub fn mod_inverse(n: &BigUint, m: &BigUint) -> Result<BigUint, NumberTheoryError> {
    if m.is_zero() {
        return Err(NumberTheoryError::ZeroModulus);
    }

    let (g, x, _) = extended_gcd(n, m);

    if !g.is_one() {
        return Err(NumberTheoryError::NoInverse {
            value: n.clone(),
            modulus: m.clone(),
        });
    }

    Ok(x.rem_euclid(m))
}

/// Solves the system `x ≡ values[i] (mod moduli[i])`.
///
/// Returns the unique solution in `[0, M)` where `M` is the product of all
/// moduli. Residues need not be reduced.
///
/// # Errors
///
/// - [`NumberTheoryError::CongruenceMismatch`] if the lists differ in length
/// - [`NumberTheoryError::EmptySystem`] if there are no equations
/// - [`NumberTheoryError::ZeroModulus`] if a modulus is zero
/// - [`NumberTheoryError::NonCoprimeModuli`] if the moduli are not pairwise
///   coprime
pub fn crt(values: &[BigUint], moduli: &[BigUint]) -> Result<BigUint, NumberTheoryError> {
    if values.len() != moduli.len() {
        return Err(NumberTheoryError::CongruenceMismatch {
            values: values.len(),
            moduli: moduli.len(),
        });
    }

    if moduli.is_empty() {
        return Err(NumberTheoryError::EmptySystem);
    }

    if moduli.iter().any(BigUint::is_zero) {
        return Err(NumberTheoryError::ZeroModulus);
    }

    let product = moduli.iter().fold(BigUint::one(), |acc, m| acc * m);
    let mut x = BigUint::zero();

    for (a, m) in values.iter().zip(moduli) {
        let partial = &product / m;

        let inverse = mod_inverse(&partial, m).map_err(|_| NumberTheoryError::NonCoprimeModuli {
            modulus: m.clone(),
        })?;

        x += &(a * &partial * &inverse);
    }

    Ok(x % &product)
}
