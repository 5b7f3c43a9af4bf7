//! Affine cipher over digraphs.
//!
//! Letters map to `0..26`. A pair of letters `(i, j)` becomes the integer
//! `x = 26*i + j` in `Z/676Z`, is encrypted as `E = (a*x + b) mod 676` and
//! mapped back to the pair `(E / 26, E % 26)`. Decryption computes
//! `a⁻¹ * (y - b) mod 676`, so `a` must be coprime with 676 for the
//! encryption to be reversible.

use super::ClassicalCipherError;
use crate::number_theory::mod_inverse;
use crate::primitives::BigUint;

const ALPHABET_LEN: u64 = 26;
const MODULUS: u64 = ALPHABET_LEN * ALPHABET_LEN;

fn letter_index(c: char) -> Result<u64, ClassicalCipherError> {
    if c.is_ascii_uppercase() {
        Ok(u64::from(c as u8 - b'A'))
    } else {
        Err(ClassicalCipherError::InvalidCharacter(c))
    }
}

fn letter(index: u64) -> char {
    (b'A' + index as u8) as char
}

/// Uppercases `text` and turns it into digraph values `26*i + j`.
fn digraphs(text: &str) -> Result<Vec<u64>, ClassicalCipherError> {
    let letters = text
        .to_uppercase()
        .chars()
        .map(letter_index)
        .collect::<Result<Vec<_>, _>>()?;

    if letters.len() % 2 != 0 {
        return Err(ClassicalCipherError::OddLength(letters.len()));
    }

    Ok(letters
        .chunks_exact(2)
        .map(|pair| pair[0] * ALPHABET_LEN + pair[1])
        .collect())
}

fn render(values: impl Iterator<Item = u64>) -> String {
    values
        .flat_map(|v| [letter(v / ALPHABET_LEN), letter(v % ALPHABET_LEN)])
        .collect()
}

fn inverse_multiplier(a: u64) -> Result<u64, ClassicalCipherError> {
    let inverse = mod_inverse(&BigUint::from(a % MODULUS), &BigUint::from(MODULUS))
        .map_err(|_| ClassicalCipherError::NonInvertibleMultiplier(a))?;

    // always below 676
    u64::try_from(&inverse).map_err(|()| ClassicalCipherError::NonInvertibleMultiplier(a))
}

/// Encrypts `plaintext` two letters at a time.
///
/// # Errors
///
/// - [`ClassicalCipherError::InvalidCharacter`] on anything but ASCII letters
/// - [`ClassicalCipherError::OddLength`] if the letter count is odd
/// - [`ClassicalCipherError::NonInvertibleMultiplier`] if `gcd(a, 676) != 1`,
///   since the result could not be decrypted
pub fn affine_block_encrypt(plaintext: &str, a: u64, b: u64) -> Result<String, ClassicalCipherError> {
    inverse_multiplier(a)?;

    let (a, b) = (a % MODULUS, b % MODULUS);
    let blocks = digraphs(plaintext)?;

    Ok(render(blocks.into_iter().map(|x| (a * x + b) % MODULUS)))
}

/// Decrypts `ciphertext` produced by [`affine_block_encrypt`] with the same
/// `a` and `b`.
///
/// # Errors
///
/// Same conditions as [`affine_block_encrypt`].
pub fn affine_block_decrypt(ciphertext: &str, a: u64, b: u64) -> Result<String, ClassicalCipherError> {
    let inverse = inverse_multiplier(a)?;

    let b = b % MODULUS;
    let blocks = digraphs(ciphertext)?;

    Ok(render(
        blocks
            .into_iter()
            .map(|y| inverse * ((y + MODULUS - b) % MODULUS) % MODULUS),
    ))
}
