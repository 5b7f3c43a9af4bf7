use super::BigUint;

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Rem, Shl, Shr, Sub, SubAssign};

pub(super) fn add_limbs(a: &[u64], b: &[u64]) -> Vec<u64> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;

    for (i, &l) in long.iter().enumerate() {
        let s = short.get(i).copied().unwrap_or(0);

        let (sum, c1) = l.overflowing_add(s);
        let (sum, c2) = sum.overflowing_add(carry);

        out.push(sum);
        carry = u64::from(c1 | c2);
    }

    if carry != 0 {
        out.push(carry);
    }

    out
}

/// Requires `a >= b`.
pub(super) fn sub_limbs(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0u64;

    for (i, &l) in a.iter().enumerate() {
        let s = b.get(i).copied().unwrap_or(0);

        let (diff, b1) = l.overflowing_sub(s);
        let (diff, b2) = diff.overflowing_sub(borrow);

        out.push(diff);
        borrow = u64::from(b1 | b2);
    }

    debug_assert_eq!(borrow, 0);

    out
}

pub(super) fn mul_limbs(a: &[u64], b: &[u64]) -> Vec<u64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut out = vec![0u64; a.len() + b.len()];

    for (i, &x) in a.iter().enumerate() {
        let mut carry = 0u128;

        for (j, &y) in b.iter().enumerate() {
            let t = x as u128 * y as u128 + out[i + j] as u128 + carry;
            out[i + j] = t as u64;
            carry = t >> 64;
        }

        out[i + b.len()] = carry as u64;
    }

    out
}

pub(super) fn shl_limbs(a: &[u64], shift: usize) -> Vec<u64> {
    if a.is_empty() {
        return Vec::new();
    }

    let limb_shift = shift / 64;
    let bit_shift = shift % 64;

    let mut out = vec![0u64; limb_shift];

    if bit_shift == 0 {
        out.extend_from_slice(a);
        return out;
    }

    let mut carry = 0u64;

    for &l in a {
        out.push((l << bit_shift) | carry);
        carry = l >> (64 - bit_shift);
    }

    if carry != 0 {
        out.push(carry);
    }

    out
}

pub(super) fn shr_limbs(a: &[u64], shift: usize) -> Vec<u64> {
    let limb_shift = shift / 64;

    if limb_shift >= a.len() {
        return Vec::new();
    }

    let bit_shift = shift % 64;
    let src = &a[limb_shift..];

    if bit_shift == 0 {
        return src.to_vec();
    }

    src.iter()
        .enumerate()
        .map(|(i, &l)| {
            let hi = src.get(i + 1).copied().unwrap_or(0);
            (l >> bit_shift) | (hi << (64 - bit_shift))
        })
        .collect()
}

pub(super) fn div_rem_limb(a: &[u64], d: u64) -> (Vec<u64>, u64) {
    let mut q = vec![0u64; a.len()];
    let mut rem = 0u128;

    for i in (0..a.len()).rev() {
        let cur = (rem << 64) | a[i] as u128;
        q[i] = (cur / d as u128) as u64;
        rem = cur % d as u128;
    }

    (q, rem as u64)
}

/// Schoolbook long division (Knuth, TAOCP vol. 2, algorithm D).
///
/// Both inputs must be normalized.
pub(super) fn div_rem_limbs(a: &[u64], b: &[u64]) -> (Vec<u64>, Vec<u64>) {
    assert!(!b.is_empty(), "attempt to divide by zero");

    if a.len() < b.len() || (a.len() == b.len() && a.iter().rev().lt(b.iter().rev())) {
        return (Vec::new(), a.to_vec());
    }

    if b.len() == 1 {
        let (q, r) = div_rem_limb(a, b[0]);
        return (q, vec![r]);
    }

    // D1: scale so the divisor's top limb has its high bit set
    let shift = b[b.len() - 1].leading_zeros() as usize;
    let v = shl_limbs(b, shift);
    let mut u = shl_limbs(a, shift);
    u.resize(a.len() + 1, 0);

    let n = v.len();
    let m = u.len() - n;
    let mut q = vec![0u64; m];

    let v_top = v[n - 1] as u128;
    let v_next = v[n - 2] as u128;

    for j in (0..m).rev() {
        // D3: estimate the quotient limb
        let num = ((u[j + n] as u128) << 64) | u[j + n - 1] as u128;
        let mut qhat = num / v_top;
        let mut rhat = num % v_top;

        if qhat > u64::MAX as u128 {
            rhat += (qhat - u64::MAX as u128) * v_top;
            qhat = u64::MAX as u128;
        }

        while rhat <= u64::MAX as u128 && qhat * v_next > ((rhat << 64) | u[j + n - 2] as u128) {
            qhat -= 1;
            rhat += v_top;
        }

        // D4: multiply and subtract
        let mut carry = 0u128;
        let mut borrow = 0u64;

        for i in 0..n {
            let p = qhat * v[i] as u128 + carry;
            carry = p >> 64;

            let (d1, b1) = u[i + j].overflowing_sub(p as u64);
            let (d2, b2) = d1.overflowing_sub(borrow);

            u[i + j] = d2;
            borrow = u64::from(b1 | b2);
        }

        let (d1, b1) = u[j + n].overflowing_sub(carry as u64);
        let (d2, b2) = d1.overflowing_sub(borrow);
        u[j + n] = d2;

        // D6: add back when the estimate was one too large
        if b1 | b2 {
            qhat -= 1;

            let mut c = 0u128;

            for i in 0..n {
                let s = u[i + j] as u128 + v[i] as u128 + c;
                u[i + j] = s as u64;
                c = s >> 64;
            }

            u[j + n] = u[j + n].wrapping_add(c as u64);
        }

        q[j] = qhat as u64;
    }

    // D8: unscale the remainder
    u.truncate(n);
    let r = shr_limbs(&u, shift);

    (q, r)
}

fn add(a: &BigUint, b: &BigUint) -> BigUint {
    BigUint::from_limbs(add_limbs(&a.limbs, &b.limbs))
}

fn sub(a: &BigUint, b: &BigUint) -> BigUint {
    match a.checked_sub(b) {
        Some(diff) => diff,
        None => panic!("attempt to subtract with overflow"),
    }
}

fn mul(a: &BigUint, b: &BigUint) -> BigUint {
    BigUint::from_limbs(mul_limbs(&a.limbs, &b.limbs))
}

fn div(a: &BigUint, b: &BigUint) -> BigUint {
    a.div_rem(b).0
}

fn rem(a: &BigUint, b: &BigUint) -> BigUint {
    a.div_rem(b).1
}

forward_binop!(BigUint, Add, add, add);
forward_binop!(BigUint, Sub, sub, sub);
forward_binop!(BigUint, Mul, mul, mul);
forward_binop!(BigUint, Div, div, div);
forward_binop!(BigUint, Rem, rem, rem);

impl AddAssign<&BigUint> for BigUint {
    fn add_assign(&mut self, rhs: &BigUint) {
        *self = add(self, rhs);
    }
}

impl SubAssign<&BigUint> for BigUint {
    fn sub_assign(&mut self, rhs: &BigUint) {
        *self = sub(self, rhs);
    }
}

impl MulAssign<&BigUint> for BigUint {
    fn mul_assign(&mut self, rhs: &BigUint) {
        *self = mul(self, rhs);
    }
}

impl Shl<usize> for &BigUint {
    type Output = BigUint;

    fn shl(self, rhs: usize) -> BigUint {
        BigUint::from_limbs(shl_limbs(&self.limbs, rhs))
    }
}

impl Shl<usize> for BigUint {
    type Output = BigUint;

    fn shl(self, rhs: usize) -> BigUint {
        &self << rhs
    }
}

impl Shr<usize> for &BigUint {
    type Output = BigUint;

    fn shr(self, rhs: usize) -> BigUint {
        BigUint::from_limbs(shr_limbs(&self.limbs, rhs))
    }
}

impl Shr<usize> for BigUint {
    type Output = BigUint;

    fn shr(self, rhs: usize) -> BigUint {
        &self >> rhs
    }
}
