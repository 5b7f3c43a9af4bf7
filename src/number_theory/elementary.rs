//! Elementary number theory on native integers.
//!
//! These helpers favour clarity over speed and are meant for small values
//! (teaching-sized groups, sanity checks, test oracles). Anything sized for
//! cryptographic use goes through the `BigUint` functions instead.

use rand::Rng;

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }

    a
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Deterministic primality by trial division up to `√n`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }

    if n < 4 {
        return true;
    }

    if n % 2 == 0 {
        return false;
    }

    let mut d = 3u64;

    while d <= n / d {
        if n % d == 0 {
            return false;
        }

        d += 2;
    }

    true
}

/// All primes `<= n`, in increasing order.
pub fn sieve_of_eratosthenes(n: u64) -> Vec<u64> {
    if n < 2 {
        return Vec::new();
    }

    let limit = n as usize;
    let mut composite = vec![false; limit + 1];
    let mut primes = Vec::new();

    for i in 2..=limit {
        if composite[i] {
            continue;
        }

        primes.push(i as u64);

        let mut multiple = i.saturating_mul(i);

        while multiple <= limit {
            composite[multiple] = true;
            multiple += i;
        }
    }

    primes
}

/// Prime factors of `n` with multiplicity, in increasing order.
///
/// `0` and `1` have no prime factors.
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();

    if n < 2 {
        return factors;
    }

    while n % 2 == 0 {
        factors.push(2);
        n /= 2;
    }

    let mut d = 3u64;

    while d <= n / d {
        while n % d == 0 {
            factors.push(d);
            n /= d;
        }

        d += 2;
    }

    if n > 1 {
        factors.push(n);
    }

    factors
}

/// Euler's totient: the count of integers in `[1, n]` coprime with `n`.
///
/// Computed exactly from the distinct prime factors.
pub fn phi(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }

    let mut factors = prime_factors(n);
    factors.dedup();

    factors.iter().fold(n, |acc, &p| acc / p * (p - 1))
}

/// Multiplicative order of `a` modulo `n`; requires `gcd(a, n) = 1`.
fn order(a: u64, n: u64) -> u64 {
    let mut x = a % n;
    let mut k = 1;

    while x != 1 {
        x = mul_mod(x, a, n);
        k += 1;
    }

    k
}

/// Generators of the multiplicative group `(Z/nZ)*`, by exhaustive search.
///
/// An element generates the group when it is coprime with `n` and its
/// order equals `phi(n)`. The list is empty when the group is not cyclic.
/// The search is quadratic in `n`.
pub fn find_group_generators(n: u64) -> Vec<u64> {
    if n < 2 {
        return Vec::new();
    }

    let group_order = phi(n);

    (1..n)
        .filter(|&a| gcd(a, n) == 1 && order(a, n) == group_order)
        .collect()
}

/// A uniformly chosen prime in `[start, end]`.
///
/// Falls back to `2` when the range holds no prime.
pub fn random_prime<R: Rng + ?Sized>(rng: &mut R, start: u64, end: u64) -> u64 {
    let primes: Vec<u64> = sieve_of_eratosthenes(end)
        .into_iter()
        .filter(|&p| p >= start)
        .collect();

    if primes.is_empty() {
        return 2;
    }

    primes[rng.gen_range(0..primes.len())]
}
