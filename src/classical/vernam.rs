use super::ClassicalCipherError;

/// Vernam cipher: XORs `message` with the first `message.len()` bytes of
/// `key`. Applying it twice with the same key restores the message.
///
/// # Errors
///
/// Returns [`ClassicalCipherError::KeyTooShort`] if the key is shorter than
/// the message.
pub fn vernam(message: &[u8], key: &[u8]) -> Result<Vec<u8>, ClassicalCipherError> {
    if key.len() < message.len() {
        return Err(ClassicalCipherError::KeyTooShort {
            key: key.len(),
            message: message.len(),
        });
    }

    Ok(message.iter().zip(key).map(|(m, k)| m ^ k).collect())
}
