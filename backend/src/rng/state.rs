//! Generator state (128 bits)
//!
//! The state is two 64-bit words, `lower` and `upper`. It fully determines
//! every future output of the generator.
//!
//! # Checkpoint Layout
//!
//! The persisted form is exactly 16 bytes: `lower` first, `upper` second,
//! each word little-endian, no padding. Any save/restore path MUST preserve
//! this order and width.
//!
//! # Critical Invariant
//!
//! The state must never be all zeros. The recurrence is degenerate there and
//! emits zeros forever. This is guaranteed by always building state through
//! the seed expander; it is NOT re-checked on every assignment.

use crate::rng::error::RngError;
use serde::{Deserialize, Serialize};

/// Size in bytes of the checkpoint layout.
pub const STATE_BYTES: usize = 16;

/// 128 bits of xoroshiro128+ generator memory
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct XoroshiroState {
    pub lower: u64,
    pub upper: u64,
}

impl XoroshiroState {
    /// Build a state from its two words.
    ///
    /// This bypasses the seed expander. An all-zero pair produces a
    /// degenerate generator; see [`XoroshiroState::is_degenerate`].
    pub const fn from_words(lower: u64, upper: u64) -> Self {
        Self { lower, upper }
    }

    /// The two words in checkpoint order (`lower`, `upper`).
    pub const fn to_words(self) -> [u64; 2] {
        [self.lower, self.upper]
    }

    /// True for the all-zero state, from which every output is zero.
    pub const fn is_degenerate(&self) -> bool {
        self.lower == 0 && self.upper == 0
    }

    /// Encode into the fixed 16-byte checkpoint layout.
    pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
        let mut bytes = [0u8; STATE_BYTES];
        bytes[..8].copy_from_slice(&self.lower.to_le_bytes());
        bytes[8..].copy_from_slice(&self.upper.to_le_bytes());
        bytes
    }

    /// Decode from the fixed 16-byte checkpoint layout.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidCheckpointLength`] if `bytes` is not
    /// exactly 16 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RngError> {
        if bytes.len() != STATE_BYTES {
            return Err(RngError::InvalidCheckpointLength {
                expected: STATE_BYTES,
                actual: bytes.len(),
            });
        }

        let mut lower = [0u8; 8];
        let mut upper = [0u8; 8];
        lower.copy_from_slice(&bytes[..8]);
        upper.copy_from_slice(&bytes[8..]);

        Ok(Self {
            lower: u64::from_le_bytes(lower),
            upper: u64::from_le_bytes(upper),
        })
    }
}

impl From<[u64; 2]> for XoroshiroState {
    fn from(words: [u64; 2]) -> Self {
        Self::from_words(words[0], words[1])
    }
}

impl From<XoroshiroState> for [u64; 2] {
    fn from(state: XoroshiroState) -> Self {
        state.to_words()
    }
}
