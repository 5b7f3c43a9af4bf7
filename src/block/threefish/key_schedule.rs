use super::KeyScheduleError;

use tracing::trace;

/// Parity constant folded into the extra key word.
pub const C240: u64 = 0x1BD1_1BDA_A9FC_1A22;

/// Size of a key or tweak word in bytes.
pub const WORD_SIZE: usize = 8;

/// Number of round keys produced.
pub const ROUNDS: usize = 20;

/// Mask applied to the three tweak/counter-mixed words of each round key.
pub const NARROW_MASK: u64 = 0xFF;

/// Supported block sizes. The key length always equals the block size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockSize {
    /// 256-bit blocks (32-byte key, 4 words).
    Threefish256,
    /// 512-bit blocks (64-byte key, 8 words).
    Threefish512,
    /// 1024-bit blocks (128-byte key, 16 words).
    Threefish1024,
}

impl BlockSize {
    pub const fn bytes(self) -> usize {
        match self {
            Self::Threefish256 => 32,
            Self::Threefish512 => 64,
            Self::Threefish1024 => 128,
        }
    }

    pub const fn words(self) -> usize {
        self.bytes() / WORD_SIZE
    }
}

/// Maps a length in bytes to a block size.
impl TryFrom<usize> for BlockSize {
    type Error = KeyScheduleError;

    fn try_from(bytes: usize) -> Result<Self, Self::Error> {
        match bytes {
            32 => Ok(Self::Threefish256),
            64 => Ok(Self::Threefish512),
            128 => Ok(Self::Threefish1024),
            other => Err(KeyScheduleError::UnsupportedBlockSize(other)),
        }
    }
}

/// One round key: `words - 3` plain key words followed by the three mixed,
/// truncated words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoundKey(pub Vec<u64>);

impl RoundKey {
    pub fn words(&self) -> &[u64] {
        &self.0
    }
}

/// A derived key schedule.
///
/// The parity word and the third tweak are computed from the inputs at
/// construction and are never mutated independently; a new key or tweak
/// means a new `KeySchedule`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchedule {
    block_size: BlockSize,
    key_words: Vec<u64>,
    tweaks: [u64; 3],
    round_keys: Vec<RoundKey>,
}

impl KeySchedule {
    /// Derives the schedule for `key` and the tweak pair.
    ///
    /// The block size is taken from the key length.
    ///
    /// # Errors
    ///
    /// Returns [`KeyScheduleError::UnsupportedBlockSize`] if `key` is not
    /// 32, 64 or 128 bytes long.
    pub fn new(key: &[u8], tweak0: u64, tweak1: u64) -> Result<Self, KeyScheduleError> {
        let block_size = BlockSize::try_from(key.len())?;

        let key_words = extend_key(key);
        let tweaks = extend_tweaks(tweak0, tweak1);

        let round_keys = (0..ROUNDS)
            .map(|i| round_key(i, &key_words, &tweaks, block_size.words()))
            .collect();

        trace!(?block_size, "threefish key schedule derived");

        Ok(Self {
            block_size,
            key_words,
            tweaks,
            round_keys,
        })
    }

    /// Derives the schedule from a single buffer holding the key followed by
    /// the two tweak words (8 bytes each, big-endian).
    ///
    /// # Errors
    ///
    /// Returns [`KeyScheduleError::InvalidUserKeyLength`] unless the buffer
    /// is exactly `block_size + 16` bytes long.
    pub fn from_user_key(block_size: BlockSize, user_key: &[u8]) -> Result<Self, KeyScheduleError> {
        let expected = block_size.bytes() + 2 * WORD_SIZE;

        if user_key.len() != expected {
            return Err(KeyScheduleError::InvalidUserKeyLength {
                expected,
                actual: user_key.len(),
            });
        }

        let (key, tweaks) = user_key.split_at(block_size.bytes());
        let (t0, t1) = tweaks.split_at(WORD_SIZE);

        Self::new(key, word_from_be(t0), word_from_be(t1))
    }

    pub fn block_size(&self) -> BlockSize {
        self.block_size
    }

    /// The key words followed by the parity word.
    pub fn key_words(&self) -> &[u64] {
        &self.key_words
    }

    /// The two supplied tweak words followed by their wrapping sum.
    pub fn tweaks(&self) -> [u64; 3] {
        self.tweaks
    }

    pub fn round_keys(&self) -> &[RoundKey] {
        &self.round_keys
    }

    pub fn into_round_keys(self) -> Vec<RoundKey> {
        self.round_keys
    }
}

/// Derives the 20 round keys for `key` and the tweak pair.
///
/// # Errors
///
/// Fails when the key length is not a supported block size.
pub fn key_schedule(key: &[u8], tweak0: u64, tweak1: u64) -> Result<Vec<RoundKey>, KeyScheduleError> {
    KeySchedule::new(key, tweak0, tweak1).map(KeySchedule::into_round_keys)
}

fn word_from_be(chunk: &[u8]) -> u64 {
    let mut word = [0u8; WORD_SIZE];
    word.copy_from_slice(chunk);
    u64::from_be_bytes(word)
}

/// Splits the key into words and appends the parity word
/// `C240 ^ k0 ^ k1 ^ ...`.
fn extend_key(key: &[u8]) -> Vec<u64> {
    let mut words: Vec<u64> = key.chunks_exact(WORD_SIZE).map(word_from_be).collect();

    let parity = words.iter().fold(C240, |acc, w| acc ^ w);
    words.push(parity);

    words
}

fn extend_tweaks(tweak0: u64, tweak1: u64) -> [u64; 3] {
    [tweak0, tweak1, tweak0.wrapping_add(tweak1)]
}

fn round_key(i: usize, key_words: &[u64], tweaks: &[u64; 3], words: usize) -> RoundKey {
    let modulus = words + 1;
    let word = |offset: usize| key_words[(i + offset) % modulus];

    let mut out: Vec<u64> = (0..words - 3).map(&word).collect();

    out.push(word(words - 3).wrapping_add(tweaks[i % 3]) & NARROW_MASK);
    out.push(word(words - 2).wrapping_add(tweaks[(i + 1) % 3]) & NARROW_MASK);
    out.push(word(words - 1).wrapping_add(i as u64) & NARROW_MASK);

    RoundKey(out)
}
