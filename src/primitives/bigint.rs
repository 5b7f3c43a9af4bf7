//! Signed arbitrary-precision integer
//!
//! `BigInt` is a sign-and-magnitude wrapper around [`BigUint`]. It exists
//! for the values that may legitimately be negative, chiefly the Bézout
//! coefficients produced by the extended Euclidean algorithm, and offers
//! only the ring operations needed to check and reduce them.

use crate::primitives::BigUint;

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};

/// Signed arbitrary-precision integer.
///
/// Zero is always stored as non-negative, so derived equality is numeric
/// equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    magnitude: BigUint,
}

impl BigInt {
    pub fn new(negative: bool, magnitude: BigUint) -> Self {
        let negative = negative && !magnitude.is_zero();

        Self {
            negative,
            magnitude,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Absolute value.
    pub fn magnitude(&self) -> &BigUint {
        &self.magnitude
    }

    /// Reduces the value into `[0, modulus)`.
    ///
    /// # Panics
    /// Panics if `modulus` is zero.
    pub fn rem_euclid(&self, modulus: &BigUint) -> BigUint {
        let r = &self.magnitude % modulus;

        if self.negative && !r.is_zero() {
            modulus - &r
        } else {
            r
        }
    }
}

fn add(a: &BigInt, b: &BigInt) -> BigInt {
    if a.negative == b.negative {
        return BigInt::new(a.negative, &a.magnitude + &b.magnitude);
    }

    match a.magnitude.cmp(&b.magnitude) {
        Ordering::Less => BigInt::new(b.negative, &b.magnitude - &a.magnitude),
        _ => BigInt::new(a.negative, &a.magnitude - &b.magnitude),
    }
}

fn sub(a: &BigInt, b: &BigInt) -> BigInt {
    add(a, &-b)
}

fn mul(a: &BigInt, b: &BigInt) -> BigInt {
    BigInt::new(a.negative != b.negative, &a.magnitude * &b.magnitude)
}

forward_binop!(BigInt, Add, add, add);
forward_binop!(BigInt, Sub, sub, sub);
forward_binop!(BigInt, Mul, mul, mul);

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::new(!self.negative, self.magnitude.clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::new(!self.negative, self.magnitude)
    }
}

impl From<BigUint> for BigInt {
    fn from(value: BigUint) -> Self {
        Self::new(false, value)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::new(value < 0, BigUint::from(value.unsigned_abs()))
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude.to_string())
    }
}
