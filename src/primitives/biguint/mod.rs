//! Arbitrary-precision unsigned integer primitive
//!
//! This module defines `BigUint`, the unsigned integer type used for moduli,
//! exponents and prime candidates.
//!
//! It is designed as a **simple, explicit value type**. The internal
//! representation is a little-endian vector of 64-bit limbs which is kept
//! normalized at all times: the most significant limb is never zero, and the
//! value zero is the empty vector. Normalization makes structural equality
//! coincide with numeric equality.

mod conv;
mod ops;
mod random;

pub use conv::ParseBigUintError;

use std::cmp::Ordering;

/// Arbitrary-precision unsigned integer.
///
/// Arithmetic operators are implemented for every owned/borrowed operand
/// combination. As with native integers, subtraction below zero and
/// division by zero panic; callers that need a fallible form use
/// [`BigUint::checked_sub`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigUint {
    pub(crate) limbs: Vec<u64>,
}

impl BigUint {
    /// Returns the value zero.
    pub const fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    /// Returns the value one.
    pub fn one() -> Self {
        Self { limbs: vec![1] }
    }

    pub(crate) fn from_limbs(limbs: Vec<u64>) -> Self {
        let mut out = Self { limbs };
        out.normalize();
        out
    }

    fn normalize(&mut self) {
        while let Some(&0) = self.limbs.last() {
            self.limbs.pop();
        }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.limbs == [1]
    }

    pub fn is_even(&self) -> bool {
        self.limbs.first().is_none_or(|&l| l & 1 == 0)
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Number of significant bits (zero for the value zero).
    pub fn bits(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(&top) => (self.limbs.len() - 1) * 64 + (64 - top.leading_zeros() as usize),
        }
    }

    /// Returns bit `i`, counting from the least significant bit.
    pub fn bit(&self, i: usize) -> bool {
        self.limbs
            .get(i / 64)
            .is_some_and(|&l| (l >> (i % 64)) & 1 == 1)
    }

    /// Sets bit `i` to one, growing the value if needed.
    pub fn set_bit(&mut self, i: usize) {
        let idx = i / 64;

        if idx >= self.limbs.len() {
            self.limbs.resize(idx + 1, 0);
        }

        self.limbs[idx] |= 1u64 << (i % 64);
    }

    /// Number of trailing zero bits, or `None` for the value zero.
    pub fn trailing_zeros(&self) -> Option<usize> {
        self.limbs
            .iter()
            .enumerate()
            .find(|&(_, &l)| l != 0)
            .map(|(i, &l)| i * 64 + l.trailing_zeros() as usize)
    }

    /// Computes `self - rhs`, or `None` if the result would be negative.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if self < rhs {
            return None;
        }

        Some(Self::from_limbs(ops::sub_limbs(&self.limbs, &rhs.limbs)))
    }

    /// Computes quotient and remainder in a single pass.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        let (q, r) = ops::div_rem_limbs(&self.limbs, &divisor.limbs);
        (Self::from_limbs(q), Self::from_limbs(r))
    }

    /// Modular exponentiation by left-to-right square-and-multiply.
    ///
    /// Performs `O(log exp)` modular multiplications. Any value modulo one
    /// is zero.
    ///
    /// # Panics
    /// Panics if `modulus` is zero.
    pub fn modpow(&self, exp: &Self, modulus: &Self) -> Self {
        assert!(!modulus.is_zero(), "modulus must be non-zero");

        if modulus.is_one() {
            return Self::zero();
        }

        let base = self % modulus;
        let mut result = Self::one();

        for i in (0..exp.bits()).rev() {
            result = &result * &result % modulus;

            if exp.bit(i) {
                result = &result * &base % modulus;
            }
        }

        result
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
