//! Linear Feedback Shift Register (LFSR)
//!
//! A Fibonacci-style register of up to 64 bits whose feedback is the XOR of
//! a fixed set of tapped positions. Besides the usual output tap, each
//! register exposes a *clocking bit* used by majority-clocked generators
//! such as A5/1.
//!
//! Bit indices are stable for the lifetime of a register: index 0 holds the
//! most recently inserted bit and index `len - 1` the oldest one. A shift
//! inserts at index 0 and drops index `len - 1`.

use crate::stream::StreamCipherError;

/// Maximum register length; the state is packed into a single `u64`.
pub const MAX_LENGTH: usize = 64;

/// A linear feedback shift register.
///
/// The register starts all-zero. Its length and tap layout never change
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lfsr {
    /// Register contents, bit `i` of the word is register index `i`.
    state: u64,

    /// Number of bits in the register.
    length: usize,

    /// Feedback taps encoded as a bit mask over register indices.
    taps: u64,

    /// Index consulted for majority voting.
    clocking_bit_index: usize,
}

impl Lfsr {
    /// Creates an all-zero register.
    ///
    /// # Errors
    ///
    /// Returns [`StreamCipherError::InvalidRegister`] if the length is not in
    /// `1..=64`, if no tap is given, or if a tap or the clocking bit index
    /// falls outside the register.
    pub fn new(
        length: usize,
        taps: &[usize],
        clocking_bit_index: usize,
    ) -> Result<Self, StreamCipherError> {
        if length == 0 || length > MAX_LENGTH {
            return Err(StreamCipherError::InvalidRegister(format!(
                "length {length} outside 1..={MAX_LENGTH}"
            )));
        }

        if taps.is_empty() {
            return Err(StreamCipherError::InvalidRegister(
                "at least one tap is required".into(),
            ));
        }

        if let Some(&tap) = taps.iter().find(|&&t| t >= length) {
            return Err(StreamCipherError::InvalidRegister(format!(
                "tap {tap} outside register of length {length}"
            )));
        }

        if clocking_bit_index >= length {
            return Err(StreamCipherError::InvalidRegister(format!(
                "clocking bit {clocking_bit_index} outside register of length {length}"
            )));
        }

        Ok(Self::new_unchecked(length, taps, clocking_bit_index))
    }

    /// Builds a register from a layout already known to be valid.
    pub(crate) fn new_unchecked(length: usize, taps: &[usize], clocking_bit_index: usize) -> Self {
        Self {
            state: 0,
            length,
            taps: taps.iter().fold(0u64, |mask, &t| mask | (1u64 << t)),
            clocking_bit_index,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    /// Always `false`; registers have at least one bit.
    pub fn is_empty(&self) -> bool {
        false
    }

    fn mask(&self) -> u64 {
        if self.length == MAX_LENGTH {
            u64::MAX
        } else {
            (1u64 << self.length) - 1
        }
    }

    /// Returns the bit at register index `i`.
    ///
    /// # Panics
    /// Panics if `i` is outside the register.
    pub fn bit(&self, i: usize) -> u8 {
        assert!(i < self.length, "bit index {i} out of range");
        ((self.state >> i) & 1) as u8
    }

    /// XOR of all tapped positions. Does not modify the register.
    #[inline]
    pub fn feedback(&self) -> u8 {
        ((self.state & self.taps).count_ones() & 1) as u8
    }

    /// Advances the register by one position.
    ///
    /// The inserted bit is `feedback()`, or the low bit of `input` when one
    /// is supplied. The oldest bit is discarded.
    #[inline]
    pub fn shift(&mut self, input: Option<u8>) {
        let incoming = input.map_or_else(|| self.feedback(), |b| b & 1);
        self.state = ((self.state << 1) | u64::from(incoming)) & self.mask();
    }

    /// The output tap, i.e. the oldest bit in the register.
    #[inline]
    pub fn output_bit(&self) -> u8 {
        self.bit(self.length - 1)
    }

    /// The bit used for majority voting.
    #[inline]
    pub fn clocking_bit(&self) -> u8 {
        self.bit(self.clocking_bit_index)
    }

    /// Resets every bit to zero.
    pub fn clear(&mut self) {
        self.state = 0;
    }
}
