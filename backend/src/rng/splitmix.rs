//! splitmix64 seed expander
//!
//! Turns one 64-bit seed into a stream of well-mixed 64-bit words. Only used
//! to fill a fresh [`XoroshiroState`]; the accumulator is discarded afterwards.

use crate::rng::state::XoroshiroState;

/// Golden-ratio increment added to the accumulator before every output.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// splitmix64 accumulator
#[derive(Debug, Clone, Copy)]
pub struct SplitMix64 {
    accumulator: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { accumulator: seed }
    }

    /// Advance the accumulator and return the next mixed word.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.accumulator = self.accumulator.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.accumulator;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Expand `seed` into a full generator state.
    ///
    /// The first output becomes `lower`, the second `upper`.
    pub fn expand(seed: u64) -> XoroshiroState {
        let mut mixer = Self::new(seed);
        let lower = mixer.next_u64();
        let upper = mixer.next_u64();
        XoroshiroState::from_words(lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_first_output() {
        // Published splitmix64 value for a zero accumulator
        let mut mixer = SplitMix64::new(0);
        assert_eq!(mixer.next_u64(), 0xe220_a839_7b1d_cdaf);
    }

    #[test]
    fn test_expand_uses_first_two_outputs() {
        let mut mixer = SplitMix64::new(42);
        let first = mixer.next_u64();
        let second = mixer.next_u64();

        let state = SplitMix64::expand(42);
        assert_eq!(state.lower, first);
        assert_eq!(state.upper, second);
    }

    #[test]
    fn test_expand_zero_seed_is_not_degenerate() {
        assert!(!SplitMix64::expand(0).is_degenerate());
    }
}
