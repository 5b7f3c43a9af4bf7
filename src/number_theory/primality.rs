//! Probabilistic primality tests.
//!
//! Both tests answer "composite" with certainty and "probably prime" with
//! an error probability that shrinks with the number of rounds: at most
//! `4^-rounds` for Miller–Rabin. Fermat's test is fooled by Carmichael
//! numbers and is kept for comparison only.

use crate::primitives::BigUint;

use rand::RngCore;

/// Fermat test using the thread-local generator.
pub fn fermat_test(n: &BigUint, rounds: usize) -> bool {
    fermat_test_with(&mut rand::thread_rng(), n, rounds)
}

/// Fermat test: `a^(n-1) ≡ 1 (mod n)` for `rounds` random `a` in
/// `[2, n-2]`.
///
/// Values below 2 are not prime; 2 and 3 are.
pub fn fermat_test_with<R: RngCore + ?Sized>(rng: &mut R, n: &BigUint, rounds: usize) -> bool {
    let two = BigUint::from(2u8);

    if n < &two {
        return false;
    }

    if n <= &BigUint::from(3u8) {
        return true;
    }

    let n_minus_one = n - &BigUint::one();

    (0..rounds).all(|_| {
        let a = BigUint::random_range(rng, &two, &n_minus_one);
        a.modpow(&n_minus_one, n).is_one()
    })
}

/// Miller–Rabin test using the thread-local generator.
pub fn miller_rabin_test(n: &BigUint, rounds: usize) -> bool {
    miller_rabin_test_with(&mut rand::thread_rng(), n, rounds)
}

/// Miller–Rabin test with `rounds` independent random witnesses.
///
/// Writes `n - 1 = 2^r * s` with `s` odd. A witness `a` in `[2, n-2]` proves
/// `n` composite unless `a^s ≡ ±1` or `a^(2^j * s) ≡ -1` for some
/// `0 < j < r`. The first such witness ends the test.
///
/// Values below 2 and even values other than 2 are rejected without
/// drawing any witness.
pub fn miller_rabin_test_with<R: RngCore + ?Sized>(rng: &mut R, n: &BigUint, rounds: usize) -> bool {
    let two = BigUint::from(2u8);

    if n < &two {
        return false;
    }

    if n <= &BigUint::from(3u8) {
        return true;
    }

    if n.is_even() {
        return false;
    }

    let n_minus_one = n - &BigUint::one();
    let r = n_minus_one.trailing_zeros().unwrap_or(0);
    let s = &n_minus_one >> r;

    'witness: for _ in 0..rounds {
        let a = BigUint::random_range(rng, &two, &n_minus_one);
        let mut x = a.modpow(&s, n);

        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..r {
            x = &x * &x % n;

            if x == n_minus_one {
                continue 'witness;
            }
        }

        return false;
    }

    true
}
