//! Greatest common divisor and Bézout's identity.

use crate::primitives::{BigInt, BigUint};

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `a*x + b*y = g = gcd(a, b)`.
///
/// The loop runs on the larger operand first and carries only the
/// magnitudes of the coefficients. Their signs alternate with every
/// division step, so they are fixed once at the end from the parity of the
/// step count. Coefficients are swapped back if the operands were.
///
/// `extended_gcd(a, 0)` is `(a, 1, 0)` and `extended_gcd(0, 0)` is
/// `(0, 0, 0)`.
pub fn extended_gcd(a: &BigUint, b: &BigUint) -> (BigUint, BigInt, BigInt) {
    let swapped = b > a;
    let (mut r0, mut r1) = if swapped {
        (b.clone(), a.clone())
    } else {
        (a.clone(), b.clone())
    };

    if r1.is_zero() {
        let x = if r0.is_zero() { BigInt::zero() } else { BigInt::from(1i64) };
        let (x, y) = if swapped { (BigInt::zero(), x) } else { (x, BigInt::zero()) };
        return (r0, x, y);
    }

    // |s| and |t| for the current and previous remainder
    let mut s_prev = BigUint::one();
    let mut s = BigUint::zero();
    let mut t_prev = BigUint::zero();
    let mut t = BigUint::one();
    let mut step = 1usize;

    loop {
        let (q, rem) = r0.div_rem(&r1);

        if rem.is_zero() {
            break;
        }

        let s_next = &q * &s + &s_prev;
        let t_next = &q * &t + &t_prev;

        s_prev = std::mem::replace(&mut s, s_next);
        t_prev = std::mem::replace(&mut t, t_next);

        r0 = std::mem::replace(&mut r1, rem);
        step += 1;
    }

    let x = BigInt::new(step % 2 == 1, s);
    let y = BigInt::new(step % 2 == 0, t);

    if swapped { (r1, y, x) } else { (r1, x, y) }
}

/// Bézout's identity: alias of [`extended_gcd`].
pub fn bezout(a: &BigUint, b: &BigUint) -> (BigUint, BigInt, BigInt) {
    extended_gcd(a, b)
}

pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();

    while !b.is_zero() {
        let r = &a % &b;
        a = std::mem::replace(&mut b, r);
    }

    a
}

/// Least common multiple; zero if either operand is zero.
pub fn lcm(a: &BigUint, b: &BigUint) -> BigUint {
    if a.is_zero() || b.is_zero() {
        return BigUint::zero();
    }

    a / &gcd(a, b) * b
}

pub fn are_coprime(a: &BigUint, b: &BigUint) -> bool {
    gcd(a, b).is_one()
}
