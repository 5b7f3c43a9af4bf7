//! Primitive types
//!
//! This module defines the integer primitives the number-theory layer is
//! built on.
//!
//! Primitives are simple, dependency-light building blocks with explicit,
//! predictable semantics. They do not attempt to replicate a full-featured
//! big-integer library: only the operations needed by extended Euclid,
//! modular exponentiation, primality testing and prime generation are
//! provided.
//!
//! Current primitives include:
//! - `BigUint`: an arbitrary-precision unsigned integer
//! - `BigInt`: a signed wrapper around `BigUint`, used for Bézout
//!   coefficients

/// Implements a binary operator for every owned/borrowed operand combination
/// by forwarding to a single `fn(&T, &T) -> T`.
macro_rules! forward_binop {
    ($ty:ty, $imp:ident, $method:ident, $func:path) => {
        impl $imp<&$ty> for &$ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $func(self, rhs)
            }
        }

        impl $imp<$ty> for $ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                $func(&self, &rhs)
            }
        }

        impl $imp<&$ty> for $ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $func(&self, rhs)
            }
        }

        impl $imp<$ty> for &$ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                $func(self, &rhs)
            }
        }
    };
}

mod bigint;
mod biguint;

/// Arbitrary-precision integer primitives.
pub use bigint::BigInt;
pub use biguint::{BigUint, ParseBigUintError};
