//! `rand` ecosystem integration
//!
//! Lets `rand` distributions (`Rng::gen_range`, `Standard`, ...) draw from an
//! engine. Seeding through `SeedableRng` goes through the same expander and
//! layout as the rest of the crate.

use crate::rng::engine::XoroshiroEngine;
use crate::rng::splitmix::SplitMix64;
use crate::rng::state::{XoroshiroState, STATE_BYTES};
use rand::{Error, RngCore, SeedableRng};

impl RngCore for XoroshiroEngine {
    /// Upper half of one output; the top bits are the strongest.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (XoroshiroEngine::next_u64(self) >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        XoroshiroEngine::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&XoroshiroEngine::next_u64(self).to_le_bytes());
        }
        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let bytes = XoroshiroEngine::next_u64(self).to_le_bytes();
            tail.copy_from_slice(&bytes[..tail.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XoroshiroEngine {
    /// The 16-byte checkpoint layout.
    type Seed = [u8; STATE_BYTES];

    /// Use the bytes as the state directly.
    ///
    /// The recorded seed is the lower word. An all-zero seed would be
    /// degenerate, so it is expanded from seed zero instead and records 0.
    fn from_seed(seed: Self::Seed) -> Self {
        match XoroshiroState::from_bytes(&seed) {
            Ok(state) if !state.is_degenerate() => Self::from_parts(state.lower, state),
            _ => Self::from_parts(0, SplitMix64::expand(0)),
        }
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state, 0)
    }
}
