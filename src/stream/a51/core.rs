use super::key::Key;
use crate::stream::StreamCipherError;
use crate::stream::lfsr::Lfsr;

use tracing::trace;

/// Static description of one register: length, feedback taps and clocking
/// bit index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterLayout {
    pub length: usize,
    pub taps: &'static [usize],
    pub clocking_bit_index: usize,
}

/// First register: 19 bits.
pub const R1: RegisterLayout = RegisterLayout {
    length: 19,
    taps: &[13, 16, 17, 18],
    clocking_bit_index: 8,
};

/// Second register: 22 bits.
pub const R2: RegisterLayout = RegisterLayout {
    length: 22,
    taps: &[20, 21],
    clocking_bit_index: 10,
};

/// Third register: 23 bits.
pub const R3: RegisterLayout = RegisterLayout {
    length: 23,
    taps: &[7, 20, 21, 22],
    clocking_bit_index: 10,
};

/// An A5/1 cipher session.
///
/// The session owns its three registers exclusively. Constructing it runs
/// the key-loading phase, so keystream is available immediately.
#[derive(Debug, Clone)]
pub struct A51 {
    key: Key,
    registers: [Lfsr; 3],
}

impl A51 {
    /// Creates a keyed session using the standard register layout.
    pub fn new(key: Key) -> Self {
        let registers = [R1, R2, R3]
            .map(|l| Lfsr::new_unchecked(l.length, l.taps, l.clocking_bit_index));

        let mut cipher = Self { key, registers };
        cipher.reset();
        cipher
    }

    /// Creates a keyed session from custom register layouts.
    ///
    /// # Errors
    ///
    /// Returns [`StreamCipherError::InvalidRegister`] if any layout is
    /// inconsistent.
    pub fn with_layouts(key: Key, layouts: [RegisterLayout; 3]) -> Result<Self, StreamCipherError> {
        let [a, b, c] = layouts;

        let registers = [
            Lfsr::new(a.length, a.taps, a.clocking_bit_index)?,
            Lfsr::new(b.length, b.taps, b.clocking_bit_index)?,
            Lfsr::new(c.length, c.taps, c.clocking_bit_index)?,
        ];

        let mut cipher = Self { key, registers };
        cipher.reset();
        Ok(cipher)
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn registers(&self) -> &[Lfsr; 3] {
        &self.registers
    }

    /// Key-loading phase.
    ///
    /// Clears the registers, then shifts all three unconditionally once per
    /// key bit, XORing the bit into each register's feedback. Majority
    /// clocking is not applied here.
    pub fn reset(&mut self) {
        for register in &mut self.registers {
            register.clear();
        }

        for bit in self.key.bits() {
            for register in &mut self.registers {
                let input = register.feedback() ^ bit;
                register.shift(Some(input));
            }
        }

        trace!("a5/1 registers keyed");
    }

    /// Majority of the three clocking bits; ties resolve to `1`.
    fn majority(&self) -> u8 {
        let ones = self
            .registers
            .iter()
            .filter(|r| r.clocking_bit() == 1)
            .count();
        let zeros = self.registers.len() - ones;

        if zeros > ones { 0 } else { 1 }
    }

    /// Produces the next keystream bit.
    pub fn next_bit(&mut self) -> u8 {
        let majority = self.majority();

        for register in &mut self.registers {
            if register.clocking_bit() == majority {
                register.shift(None);
            }
        }

        self.registers
            .iter()
            .fold(0, |acc, r| acc ^ r.output_bit())
    }

    /// Produces `len` keystream bits, continuing the current session.
    pub fn keystream(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| self.next_bit()).collect()
    }

    /// XORs the keystream into `data` in place, continuing the current
    /// session. Bits are consumed most significant first within each byte.
    pub fn apply_keystream(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            for i in (0..8).rev() {
                *byte ^= self.next_bit() << i;
            }
        }
    }

    /// Encrypts or decrypts `message`.
    ///
    /// The session is re-keyed first, so two calls with the same input give
    /// the same output and `run(run(m)) == m`.
    pub fn run(&mut self, message: &[u8]) -> Vec<u8> {
        self.reset();

        let mut out = message.to_vec();
        self.apply_keystream(&mut out);

        out
    }
}

/// One-shot symmetric encryption/decryption with a fresh session.
pub fn stream_cipher_run(key: Key, message: &[u8]) -> Vec<u8> {
    A51::new(key).run(message)
}
