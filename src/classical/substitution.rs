use super::ClassicalCipherError;

use std::collections::HashMap;

/// Monoalphabetic substitution.
///
/// The message is uppercased, then each character is replaced by the
/// character at the same position in `cipher_alphabet` as it occupies in
/// `plain_alphabet`. Decryption is the same call with the alphabets
/// swapped.
///
/// # Errors
///
/// - [`ClassicalCipherError::AlphabetMismatch`] if the alphabets differ in
///   length
/// - [`ClassicalCipherError::InvalidCharacter`] if the uppercased message
///   contains a character outside `plain_alphabet`
pub fn monoalphabetic_substitution(
    message: &str,
    plain_alphabet: &str,
    cipher_alphabet: &str,
) -> Result<String, ClassicalCipherError> {
    let plain: Vec<char> = plain_alphabet.chars().collect();
    let cipher: Vec<char> = cipher_alphabet.chars().collect();

    if plain.len() != cipher.len() {
        return Err(ClassicalCipherError::AlphabetMismatch {
            plain: plain.len(),
            cipher: cipher.len(),
        });
    }

    let table: HashMap<char, char> = plain.into_iter().zip(cipher).collect();

    message
        .to_uppercase()
        .chars()
        .map(|c| table.get(&c).copied().ok_or(ClassicalCipherError::InvalidCharacter(c)))
        .collect()
}
