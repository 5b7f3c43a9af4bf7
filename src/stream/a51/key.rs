use crate::stream::StreamCipherError;

use std::str::FromStr;

/// Number of key bits loaded into the registers.
pub const KEY_BITS: usize = 64;

/// A 64-bit A5/1 session key.
///
/// Key bit 0 (the first bit loaded) is the most significant bit of the
/// underlying word, so `Key::from_bits("1000…")` equals `Key::from(1 << 63)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(u64);

impl Key {
    /// Parses a key written as exactly 64 `'0'`/`'1'` characters.
    ///
    /// # Errors
    ///
    /// - [`StreamCipherError::InvalidKeyLength`] if the string does not hold
    ///   exactly 64 characters
    /// - [`StreamCipherError::InvalidKeyDigit`] on any other character
    pub fn from_bits(bits: &str) -> Result<Self, StreamCipherError> {
        let actual = bits.chars().count();

        if actual != KEY_BITS {
            return Err(StreamCipherError::InvalidKeyLength {
                expected: KEY_BITS,
                actual,
            });
        }

        bits.chars().try_fold(0u64, |acc, c| match c {
            '0' => Ok(acc << 1),
            '1' => Ok((acc << 1) | 1),
            other => Err(StreamCipherError::InvalidKeyDigit(other)),
        })
        .map(Self)
    }

    /// Builds a key from exactly 8 bytes, big-endian.
    ///
    /// # Errors
    ///
    /// Returns [`StreamCipherError::InvalidKeyLength`] for any other length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StreamCipherError> {
        let word: [u8; 8] = bytes
            .try_into()
            .map_err(|_| StreamCipherError::InvalidKeyLength {
                expected: KEY_BITS,
                actual: bytes.len() * 8,
            })?;

        Ok(Self(u64::from_be_bytes(word)))
    }

    /// Key bit `i` in loading order.
    ///
    /// # Panics
    /// Panics if `i >= 64`.
    pub fn bit(&self, i: usize) -> u8 {
        assert!(i < KEY_BITS, "key bit {i} out of range");
        ((self.0 >> (KEY_BITS - 1 - i)) & 1) as u8
    }

    /// The key bits in loading order.
    pub fn bits(&self) -> impl Iterator<Item = u8> + '_ {
        (0..KEY_BITS).map(|i| self.bit(i))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for Key {
    type Err = StreamCipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bits(s)
    }
}
