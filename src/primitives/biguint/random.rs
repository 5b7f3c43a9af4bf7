//! Random sampling of `BigUint` values.
//!
//! Sampling is driven by any `rand::RngCore`, so callers choose between the
//! thread-local generator and a seeded one.

use super::BigUint;

use rand::RngCore;

impl BigUint {
    /// Draws a uniformly random value with at most `bits` bits.
    pub fn random_bits<R: RngCore + ?Sized>(rng: &mut R, bits: usize) -> Self {
        let count = bits.div_ceil(64);
        let mut limbs: Vec<u64> = (0..count).map(|_| rng.next_u64()).collect();

        let excess = count * 64 - bits;

        if excess > 0 {
            if let Some(top) = limbs.last_mut() {
                *top >>= excess;
            }
        }

        Self::from_limbs(limbs)
    }

    /// Draws a uniformly random value in `[0, bound)` by rejection sampling.
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    pub fn random_below<R: RngCore + ?Sized>(rng: &mut R, bound: &Self) -> Self {
        assert!(!bound.is_zero(), "random_below: empty range");

        let bits = bound.bits();

        loop {
            let candidate = Self::random_bits(rng, bits);

            if &candidate < bound {
                return candidate;
            }
        }
    }

    /// Draws a uniformly random value in `[low, high)`.
    ///
    /// # Panics
    /// Panics if `low >= high`.
    pub fn random_range<R: RngCore + ?Sized>(rng: &mut R, low: &Self, high: &Self) -> Self {
        assert!(low < high, "random_range: empty range");

        low + Self::random_below(rng, &(high - low))
    }
}
