//! Property-based tests for the number-theory layer.

use cryptolab::number_theory::{bezout, crt, gcd, mod_inverse};
use cryptolab::primitives::{BigInt, BigUint};
use proptest::prelude::*;

/// Moduli that are pairwise coprime.
const PRIMES: [u64; 6] = [3, 5, 7, 11, 13, 65537];

proptest! {
    /// `a*x + b*y == gcd(a, b)` for every pair.
    #[test]
    fn bezout_identity(a in any::<u64>(), b in any::<u64>()) {
        let (a, b) = (BigUint::from(a), BigUint::from(b));
        let (g, x, y) = bezout(&a, &b);

        prop_assert_eq!(&g, &gcd(&a, &b));
        prop_assert_eq!(BigInt::from(a) * x + BigInt::from(b) * y, BigInt::from(g));
    }

    /// BigUint arithmetic agrees with native 128-bit arithmetic.
    #[test]
    fn arithmetic_matches_u128(a in any::<u64>(), b in 1..u64::MAX) {
        let (x, y) = (BigUint::from(a), BigUint::from(b));

        prop_assert_eq!(u128::try_from(&(&x * &y)).unwrap(), a as u128 * b as u128);
        prop_assert_eq!(u128::try_from(&(&x + &y)).unwrap(), a as u128 + b as u128);
        prop_assert_eq!(u64::try_from(&(&x / &y)).unwrap(), a / b);
        prop_assert_eq!(u64::try_from(&(&x % &y)).unwrap(), a % b);
    }

    /// Decimal formatting and parsing agree with native integers.
    #[test]
    fn decimal_matches_u128(v in any::<u128>()) {
        let big = BigUint::from(v);

        prop_assert_eq!(big.to_string(), v.to_string());
        prop_assert_eq!(v.to_string().parse::<BigUint>().unwrap(), big);
    }

    /// The inverse is reduced and multiplies back to one.
    #[test]
    fn inverse_modulo_prime(a in 1u64..65537) {
        let p = BigUint::from(65537u64);
        let inv = mod_inverse(&BigUint::from(a), &p).unwrap();

        prop_assert!(inv < p);
        prop_assert!((BigUint::from(a) * inv % &p).is_one());
    }

    /// The CRT solution satisfies every congruence and is below the product.
    #[test]
    fn crt_solution_satisfies_system(
        residues in proptest::collection::vec(any::<u32>(), PRIMES.len()),
    ) {
        let values: Vec<BigUint> = residues.iter().map(|&r| BigUint::from(r)).collect();
        let moduli: Vec<BigUint> = PRIMES.iter().map(|&m| BigUint::from(m)).collect();

        let x = crt(&values, &moduli).unwrap();
        let product = PRIMES.iter().fold(BigUint::one(), |acc, &m| acc * BigUint::from(m));

        prop_assert!(x < product);

        for (v, m) in values.iter().zip(&moduli) {
            prop_assert_eq!(&x % m, v % m);
        }
    }
}
