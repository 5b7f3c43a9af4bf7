//! SHA-1 core hashing functions
//!
//! The pipeline is **pad → split into 64-byte blocks → compress each block
//! → emit digest**. Padding is applied once to the whole input; the five
//! accumulator words then persist across all blocks of that input.

use super::computations::all_rounds;
use super::{BLOCK_SIZE, DIGEST_SIZE, H160_INIT};

use std::fmt::{self, Display, Formatter};

/// Pads `input` to a whole number of 64-byte blocks.
///
/// Block-aligned input (including the empty input) is returned unchanged.
/// Otherwise a single `0x80` byte is appended, then zero bytes until the
/// length is congruent to 56 modulo 64, then the original length in bits as
/// a 64-bit big-endian integer.
pub fn pad(input: &[u8]) -> Vec<u8> {
    let mut stream = input.to_vec();

    if stream.len() % BLOCK_SIZE == 0 {
        return stream;
    }

    let bit_len = (input.len() as u64).wrapping_mul(8);

    stream.push(0x80);

    let zeros = (56 + BLOCK_SIZE - stream.len() % BLOCK_SIZE) % BLOCK_SIZE;
    stream.resize(stream.len() + zeros, 0);
    stream.extend_from_slice(&bit_len.to_be_bytes());

    stream
}

/// Compresses a single 512-bit block into `state`.
///
/// Input words are read big-endian.
#[inline(always)]
pub fn compress(block: &[u8; BLOCK_SIZE], state: &mut [u32; 5]) {
    let mut w = [0u32; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    all_rounds(state, w);
}

/// A 160-bit digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha1Digest(pub [u8; DIGEST_SIZE]);

impl Sha1Digest {
    /// 40 lowercase hexadecimal characters.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

/// Serializes the five accumulator words big-endian.
impl From<[u32; 5]> for Sha1Digest {
    fn from(state: [u32; 5]) -> Self {
        let mut out = [0u8; DIGEST_SIZE];

        for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        Self(out)
    }
}

impl AsRef<[u8]> for Sha1Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Sha1Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Block-level SHA-1 accumulator.
///
/// Callers that already hold padded data feed it block by block; [`sha1`]
/// is the one-shot entry point that also pads. A fresh accumulator always
/// starts from `H160_INIT`.
#[derive(Debug, Clone)]
pub struct Sha1 {
    state: [u32; 5],
    blocks: u64,
}

impl Sha1 {
    pub fn new() -> Self {
        Self {
            state: H160_INIT,
            blocks: 0,
        }
    }

    /// Compresses one block into the accumulator.
    pub fn update_block(&mut self, block: &[u8; BLOCK_SIZE]) {
        compress(block, &mut self.state);
        self.blocks += 1;
    }

    /// Current accumulator words H0..H4.
    pub fn state(&self) -> [u32; 5] {
        self.state
    }

    /// Number of blocks compressed so far.
    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    pub fn digest(&self) -> Sha1Digest {
        Sha1Digest::from(self.state)
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the digest of `input`.
pub fn sha1(input: &[u8]) -> Sha1Digest {
    let padded = pad(input);
    let mut hasher = Sha1::new();

    for chunk in padded.chunks_exact(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        hasher.update_block(&block);
    }

    hasher.digest()
}

/// Computes the digest of `input` as 40 hexadecimal characters.
pub fn hash(input: &[u8]) -> String {
    sha1(input).to_hex()
}
