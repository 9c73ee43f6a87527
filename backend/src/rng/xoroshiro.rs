//! xoroshiro128+ core step and jump
//!
//! # Algorithm
//!
//! xoroshiro128+ (1.0, parameters a=24, b=16, c=37) keeps 128 bits of state
//! and outputs the wrapping sum of its two words. The `+` scrambler is fast
//! but leaves the lowest bits weaker than the top ones, so callers wanting
//! the best bits should take them from the top (see `sampling::boolean`).
//!
//! # Parallel Substreams
//!
//! [`XoroshiroState::jump`] is equivalent to 2^64 calls to
//! [`XoroshiroState::step`]. Each worker jumps `worker_index` times from the
//! same expanded seed, so workers get non-overlapping subsequences of up to
//! 2^64 draws each.

use crate::rng::contract::RandomBitGenerator;
use crate::rng::splitmix::SplitMix64;
use crate::rng::state::XoroshiroState;

const ROTATE_A: u32 = 24;
const SHIFT_B: u32 = 16;
const ROTATE_C: u32 = 37;

/// Jump polynomial over GF(2); bit `b` of word `i` is coefficient `64 * i + b`.
const JUMP: [u64; 2] = [0xdf90_0294_d8f5_54a5, 0x1708_65df_4b32_01fc];

impl XoroshiroState {
    /// Advance one tick and return the raw 64-bit output.
    #[inline]
    pub fn step(&mut self) -> u64 {
        let s0 = self.lower;
        let mut s1 = self.upper;
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.lower = s0.rotate_left(ROTATE_A) ^ s1 ^ (s1 << SHIFT_B);
        self.upper = s1.rotate_left(ROTATE_C);

        result
    }

    /// Advance by 2^64 steps in 128 steps of work.
    pub fn jump(&mut self) {
        let mut lower = 0u64;
        let mut upper = 0u64;

        for word in JUMP {
            for bit in 0..64 {
                if word & (1u64 << bit) != 0 {
                    lower ^= self.lower;
                    upper ^= self.upper;
                }
                self.step();
            }
        }

        self.lower = lower;
        self.upper = upper;
        log::trace!("xoroshiro jump -> ({:#018x}, {:#018x})", lower, upper);
    }
}

impl RandomBitGenerator for XoroshiroState {
    const MIN: u64 = 0;
    const MAX: u64 = u64::MAX;

    fn seed(&mut self, seed: u64, worker_index: u64) {
        *self = initial_state(seed, worker_index);
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.step()
    }
}

/// Build the starting state for one execution context.
///
/// Expands `seed` then jumps `worker_index` times. Cost is linear in
/// `worker_index`; use [`substreams`] when seeding many workers at once.
pub fn initial_state(seed: u64, worker_index: u64) -> XoroshiroState {
    let mut state = SplitMix64::expand(seed);
    for _ in 0..worker_index {
        state.jump();
    }
    state
}

/// Starting states for workers `0..count`, sharing one seed.
///
/// Element `i` equals `initial_state(seed, i)`, but each state is jumped
/// from its predecessor so the whole set costs `count - 1` jumps.
pub fn substreams(seed: u64, count: usize) -> Vec<XoroshiroState> {
    let mut states = Vec::with_capacity(count);
    let mut state = SplitMix64::expand(seed);

    for i in 0..count {
        if i > 0 {
            state.jump();
        }
        states.push(state);
    }

    states
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_output_is_wrapping_sum() {
        let mut state = XoroshiroState::from_words(u64::MAX, 2);
        assert_eq!(state.step(), 1);
    }

    #[test]
    fn test_step_single_bit() {
        // lower = 1, upper = 0:
        //   s1 = 1
        //   lower' = rotl(1, 24) ^ 1 ^ (1 << 16)
        //   upper' = rotl(1, 37)
        let mut state = XoroshiroState::from_words(1, 0);
        assert_eq!(state.step(), 1);
        assert_eq!(state.lower, (1 << 24) | 1 | (1 << 16));
        assert_eq!(state.upper, 1 << 37);
    }

    #[test]
    fn test_rotate_wraps_high_bits() {
        let mut state = XoroshiroState::from_words(1 << 63, 0);
        state.step();
        // rotl(1 << 63, 24) = 1 << 23; (1 << 63) << 16 shifts out entirely
        assert_eq!(state.lower, (1 << 23) | (1 << 63));
        // rotl(1 << 63, 37) = 1 << 36
        assert_eq!(state.upper, 1 << 36);
    }

    #[test]
    fn test_jump_is_linear() {
        // Jump is a GF(2)-linear map, so jump(a ^ b) == jump(a) ^ jump(b)
        let a = XoroshiroState::from_words(0x1234_5678_9abc_def0, 0x0fed_cba9_8765_4321);
        let b = XoroshiroState::from_words(0xdead_beef_0000_0001, 0x0000_0001_cafe_babe);
        let ab = XoroshiroState::from_words(a.lower ^ b.lower, a.upper ^ b.upper);

        let (mut ja, mut jb, mut jab) = (a, b, ab);
        ja.jump();
        jb.jump();
        jab.jump();

        assert_eq!(jab.lower, ja.lower ^ jb.lower);
        assert_eq!(jab.upper, ja.upper ^ jb.upper);
    }

    #[test]
    fn test_initial_state_worker_zero_is_expanded_seed() {
        assert_eq!(initial_state(7, 0), SplitMix64::expand(7));
    }

    #[test]
    fn test_substreams_match_initial_state() {
        let states = substreams(2024, 4);
        assert_eq!(states.len(), 4);
        for (i, state) in states.iter().enumerate() {
            assert_eq!(*state, initial_state(2024, i as u64));
        }
    }

    #[test]
    fn test_substreams_empty() {
        assert!(substreams(1, 0).is_empty());
    }
}
