use cryptolab::primitives::{BigInt, BigUint, ParseBigUintError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn big(s: &str) -> BigUint {
    s.parse().unwrap()
}

fn to_u128(v: &BigUint) -> u128 {
    u128::try_from(v).unwrap()
}

fn expect_biguint_eq(got: &BigUint, expected: &str, context: &str) {
    assert_eq!(
        got.to_string(),
        expected,
        "{context}\nExpected {expected}\nGot      {got}",
    );
}

// -------------------------------------------------------
// 1. BASIC VALUES
// -------------------------------------------------------

#[test]
fn zero_and_one() {
    assert!(BigUint::zero().is_zero());
    assert!(BigUint::one().is_one());
    assert_eq!(BigUint::zero().bits(), 0);
    assert_eq!(BigUint::from(0u64), BigUint::zero());
    assert_eq!(BigUint::default(), BigUint::zero());
}

#[test]
fn bit_queries() {
    let v = BigUint::from(0b1011_0000u64);

    assert_eq!(v.bits(), 8);
    assert!(v.bit(7));
    assert!(!v.bit(6));
    assert!(!v.bit(500));
    assert_eq!(v.trailing_zeros(), Some(4));
    assert_eq!(BigUint::zero().trailing_zeros(), None);
    assert!(v.is_even());
    assert!(BigUint::from(7u8).is_odd());
}

#[test]
fn set_bit_grows_value() {
    let mut v = BigUint::zero();
    v.set_bit(130);
    v.set_bit(0);

    assert_eq!(v.bits(), 131);
    assert_eq!(v, (BigUint::one() << 130) + BigUint::one());
}

#[test]
fn ordering_is_numeric() {
    let small = BigUint::from(u64::MAX);
    let large = BigUint::from(u64::MAX as u128 + 1);

    assert!(small < large);
    assert!(large > BigUint::from(5u8));
    assert_eq!(large.cmp(&large.clone()), std::cmp::Ordering::Equal);
}

// -------------------------------------------------------
// 2. ARITHMETIC
// -------------------------------------------------------

#[test]
fn add_carries_across_limbs() {
    let a = BigUint::from(u64::MAX);
    let sum = &a + &BigUint::one();

    assert_eq!(to_u128(&sum), 1u128 << 64);
    expect_biguint_eq(
        &(big("340282366920938463463374607431768211455") + BigUint::one()),
        "340282366920938463463374607431768211456",
        "2^128 - 1 + 1",
    );
}

#[test]
fn sub_borrows_across_limbs() {
    let a = BigUint::from(1u128 << 64);
    let diff = &a - &BigUint::one();

    assert_eq!(diff, BigUint::from(u64::MAX));
    assert_eq!(&a - &a, BigUint::zero());
}

#[test]
fn checked_sub_underflow() {
    assert_eq!(BigUint::from(3u8).checked_sub(&BigUint::from(5u8)), None);
    assert_eq!(
        BigUint::from(5u8).checked_sub(&BigUint::from(3u8)),
        Some(BigUint::from(2u8))
    );
}

#[test]
#[should_panic]
fn sub_underflow_panics() {
    let _ = BigUint::from(3u8) - BigUint::from(5u8);
}

#[test]
fn mul_matches_u128() {
    let pairs = [
        (0u64, 12345u64),
        (1, u64::MAX),
        (u64::MAX, u64::MAX),
        (0xdead_beef, 0xcafe_babe_f00d),
    ];

    for (a, b) in pairs {
        let got = BigUint::from(a) * BigUint::from(b);
        assert_eq!(to_u128(&got), a as u128 * b as u128, "{a} * {b}");
    }
}

#[test]
fn mul_large() {
    // (2^128 - 1)^2 = 2^256 - 2^129 + 1
    let a = big("340282366920938463463374607431768211455");

    expect_biguint_eq(
        &(&a * &a),
        "115792089237316195423570985008687907852589419931798687112530834793049593217025",
        "(2^128 - 1)^2",
    );
}

#[test]
fn div_rem_matches_u128() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let a: u128 = rng.gen_range(0..u128::MAX);
        let b: u128 = match rng.gen_range(0..3) {
            0 => rng.gen_range(1..u8::MAX as u128),
            1 => rng.gen_range(1..u64::MAX as u128),
            _ => rng.gen_range(1..u128::MAX),
        };

        let (q, r) = BigUint::from(a).div_rem(&BigUint::from(b));

        assert_eq!(to_u128(&q), a / b, "{a} / {b}");
        assert_eq!(to_u128(&r), a % b, "{a} % {b}");
    }
}

#[test]
fn div_rem_multi_limb_divisor() {
    let n = big("115792089237316195423570985008687907852589419931798687112530834793049593217025");
    let d = big("340282366920938463463374607431768211455");

    let (q, r) = n.div_rem(&d);

    assert_eq!(q, d);
    assert!(r.is_zero());

    let (q, r) = (&n + &BigUint::from(17u8)).div_rem(&d);
    assert_eq!(q, d);
    assert_eq!(r, BigUint::from(17u8));
}

#[test]
fn div_rem_reconstructs_dividend() {
    let n = big("98765432109876543210987654321098765432109876543210");
    let d = big("1234567890123456789012345");

    let (q, r) = n.div_rem(&d);

    assert!(r < d);
    assert_eq!(&q * &d + &r, n);
}

#[test]
#[should_panic]
fn div_by_zero_panics() {
    let _ = BigUint::from(1u8) / BigUint::zero();
}

#[test]
fn shifts() {
    let v = BigUint::from(0b101u8);

    assert_eq!(&v << 100 >> 100, v);
    assert_eq!((&v << 64).bits(), 67);
    assert_eq!(v.clone() >> 3, BigUint::zero());
    assert_eq!(BigUint::from(u64::MAX) << 1, BigUint::from((u64::MAX as u128) << 1));
}

#[test]
fn assign_operators() {
    let mut v = BigUint::from(10u8);

    v += &BigUint::from(5u8);
    v *= &BigUint::from(3u8);
    v -= &BigUint::from(44u8);

    assert_eq!(v, BigUint::one());
}

#[test]
fn modpow_small() {
    let r = BigUint::from(4u8).modpow(&BigUint::from(13u8), &BigUint::from(497u16));
    assert_eq!(r, BigUint::from(445u16));

    assert!(BigUint::from(5u8).modpow(&BigUint::from(3u8), &BigUint::one()).is_zero());
    assert!(BigUint::from(5u8).modpow(&BigUint::zero(), &BigUint::from(7u8)).is_one());
}

#[test]
fn modpow_fermat_little_theorem() {
    // 2^127 - 1 is prime
    let p = big("170141183460469231731687303715884105727");
    let exp = &p - &BigUint::one();

    for base in [2u64, 3, 65537, 0xdead_beef] {
        assert!(BigUint::from(base).modpow(&exp, &p).is_one(), "base {base}");
    }
}

// -------------------------------------------------------
// 3. CONVERSIONS
// -------------------------------------------------------

#[test]
fn decimal_roundtrip() {
    for s in [
        "0",
        "1",
        "18446744073709551615",
        "18446744073709551616",
        "1000000000000000000000000000000000000000",
        "123456789012345678901234567890123456789012345678901234567890",
    ] {
        assert_eq!(big(s).to_string(), s);
    }
}

#[test]
fn parse_accepts_leading_zeros() {
    assert_eq!(big("000042"), BigUint::from(42u8));
}

#[test]
fn parse_errors() {
    assert_eq!("".parse::<BigUint>().unwrap_err(), ParseBigUintError::Empty);
    assert_eq!(
        "12a4".parse::<BigUint>().unwrap_err(),
        ParseBigUintError::InvalidDigit('a')
    );
    assert_eq!(
        "-5".parse::<BigUint>().unwrap_err(),
        ParseBigUintError::InvalidDigit('-')
    );
}

#[test]
fn hex_formatting() {
    assert_eq!(format!("{:x}", BigUint::zero()), "0");
    assert_eq!(format!("{:x}", BigUint::from(0xdead_beefu32)), "deadbeef");
    assert_eq!(format!("{:x}", BigUint::from(1u128 << 64)), "10000000000000000");
}

#[test]
fn bytes_roundtrip() {
    let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a];
    let v = BigUint::from_be_bytes(&bytes);

    assert_eq!(v, BigUint::from(0x0102_0304_0506_0708_090au128));
    assert_eq!(v.to_be_bytes(), bytes);

    assert_eq!(BigUint::from_be_bytes(&[0, 0, 7]).to_be_bytes(), [7]);
    assert!(BigUint::zero().to_be_bytes().is_empty());
    assert!(BigUint::from_be_bytes(&[]).is_zero());
}

#[test]
fn widening_conversions() {
    assert_eq!(BigUint::from(u16::MAX), BigUint::from(65535u64));
    assert_eq!(BigUint::from(0u16), BigUint::zero());
    assert_eq!(BigUint::from(300u16).to_string(), "300");
}

#[test]
fn narrowing_conversions() {
    assert_eq!(u64::try_from(&BigUint::from(99u8)), Ok(99));
    assert_eq!(u64::try_from(&BigUint::from(1u128 << 64)), Err(()));
    assert_eq!(u128::try_from(&(BigUint::one() << 128)), Err(()));
}

#[test]
fn random_values_respect_bounds() {
    let mut rng = StdRng::seed_from_u64(99);
    let low = BigUint::from(1000u16);
    let high = BigUint::from(1010u16);

    for _ in 0..200 {
        assert!(BigUint::random_bits(&mut rng, 70).bits() <= 70);

        let v = BigUint::random_range(&mut rng, &low, &high);
        assert!(v >= low && v < high);
    }
}

// -------------------------------------------------------
// 4. SIGNED INTEGERS
// -------------------------------------------------------

#[test]
fn bigint_sign_handling() {
    let a = BigInt::from(-7i64);
    let b = BigInt::from(3i64);

    assert_eq!(&a + &b, BigInt::from(-4i64));
    assert_eq!(&b - &a, BigInt::from(10i64));
    assert_eq!(&a * &b, BigInt::from(-21i64));
    assert_eq!(&a * &a, BigInt::from(49i64));
    assert_eq!(-&b, BigInt::from(-3i64));
}

#[test]
fn bigint_negative_zero_is_zero() {
    let z = BigInt::new(true, BigUint::zero());

    assert!(!z.is_negative());
    assert_eq!(z, BigInt::zero());
    assert_eq!(BigInt::from(5i64) - BigInt::from(5i64), BigInt::zero());
}

#[test]
fn bigint_rem_euclid() {
    let m = BigUint::from(7u8);

    assert_eq!(BigInt::from(-1i64).rem_euclid(&m), BigUint::from(6u8));
    assert_eq!(BigInt::from(-14i64).rem_euclid(&m), BigUint::zero());
    assert_eq!(BigInt::from(15i64).rem_euclid(&m), BigUint::one());
}

#[test]
fn bigint_display() {
    assert_eq!(BigInt::from(-42i64).to_string(), "-42");
    assert_eq!(BigInt::from(42i64).to_string(), "42");
    assert_eq!(BigInt::zero().to_string(), "0");
    assert_eq!(BigInt::from(i64::MIN).magnitude(), &BigUint::from(1u64 << 63));
}
