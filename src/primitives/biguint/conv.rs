//! Conversions between `BigUint` and native representations
//!
//! This module defines explicit conversions between `BigUint` and native
//! integers, big-endian byte strings and decimal text.
//!
//! Widening conversions are infallible. Narrowing conversions are fallible
//! and never truncate silently.

use super::BigUint;
use super::ops::{add_limbs, div_rem_limb, mul_limbs};

use std::fmt::{self, Display, Formatter, LowerHex};
use std::str::FromStr;

use thiserror::Error;

/// Largest power of ten that fits in a limb.
const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 19;

/// Error returned when parsing a decimal string into a `BigUint` fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBigUintError {
    #[error("cannot parse integer from empty string")]
    Empty,

    #[error("invalid decimal digit {0:?}")]
    InvalidDigit(char),
}

impl From<u64> for BigUint {
    fn from(value: u64) -> Self {
        Self::from_limbs(vec![value])
    }
}

impl From<u16> for BigUint {
    fn from(value: u16) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u32> for BigUint {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u8> for BigUint {
    fn from(value: u8) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<usize> for BigUint {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

/// Splits a `u128` into two little-endian limbs.
impl From<u128> for BigUint {
    fn from(value: u128) -> Self {
        Self::from_limbs(vec![value as u64, (value >> 64) as u64])
    }
}

/// Succeeds only if the value fits in 64 bits.
impl TryFrom<&BigUint> for u64 {
    type Error = ();

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        match value.limbs.as_slice() {
            [] => Ok(0),
            [l] => Ok(*l),
            _ => Err(()),
        }
    }
}

/// Succeeds only if the value fits in 128 bits.
impl TryFrom<&BigUint> for u128 {
    type Error = ();

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        match value.limbs.as_slice() {
            [] => Ok(0),
            [lo] => Ok(*lo as u128),
            [lo, hi] => Ok(((*hi as u128) << 64) | *lo as u128),
            _ => Err(()),
        }
    }
}

impl BigUint {
    /// Interprets `bytes` as a big-endian unsigned integer.
    ///
    /// Leading zero bytes are accepted and ignored.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let limbs = bytes
            .rchunks(8)
            .map(|chunk| {
                let mut word = [0u8; 8];
                word[8 - chunk.len()..].copy_from_slice(chunk);
                u64::from_be_bytes(word)
            })
            .collect();

        Self::from_limbs(limbs)
    }

    /// Minimal big-endian encoding. Zero encodes to an empty vector.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out: Vec<u8> = self
            .limbs
            .iter()
            .rev()
            .flat_map(|l| l.to_be_bytes())
            .collect();

        let leading = out.iter().take_while(|&&b| b == 0).count();
        out.drain(..leading);

        out
    }
}

impl FromStr for BigUint {
    type Err = ParseBigUintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseBigUintError::Empty);
        }

        if let Some(c) = s.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ParseBigUintError::InvalidDigit(c));
        }

        let mut limbs = Vec::new();

        for chunk in s.as_bytes().chunks(DECIMAL_CHUNK_DIGITS) {
            let scale = 10u64.pow(chunk.len() as u32);
            let value = chunk
                .iter()
                .fold(0u64, |acc, &d| acc * 10 + u64::from(d - b'0'));

            limbs = mul_limbs(&limbs, &[scale]);
            limbs = add_limbs(&limbs, &[value]);
        }

        Ok(Self::from_limbs(limbs))
    }
}

/// Formats the value in decimal.
impl Display for BigUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.pad_integral(true, "", "0");
        }

        let mut chunks = Vec::new();
        let mut rest = self.clone();

        while !rest.is_zero() {
            let (q, r) = div_rem_limb(&rest.limbs, DECIMAL_CHUNK);
            chunks.push(r);
            rest = Self::from_limbs(q);
        }

        let mut s = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS);

        for (i, chunk) in chunks.iter().rev().enumerate() {
            if i == 0 {
                s.push_str(&chunk.to_string());
            } else {
                s.push_str(&format!("{chunk:019}"));
            }
        }

        f.pad_integral(true, "", &s)
    }
}

impl LowerHex for BigUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut s = String::new();

        for (i, limb) in self.limbs.iter().rev().enumerate() {
            if i == 0 {
                s.push_str(&format!("{limb:x}"));
            } else {
                s.push_str(&format!("{limb:016x}"));
            }
        }

        if s.is_empty() {
            s.push('0');
        }

        f.pad_integral(true, "0x", &s)
    }
}
