//! Owning generator engine
//!
//! [`XoroshiroEngine`] exclusively owns one [`XoroshiroState`] and remembers
//! the seed that produced it. It is the type downstream code holds.
//!
//! # Ownership
//!
//! - Cloning duplicates the state: the clone and the original continue as
//!   two independent streams from the same point.
//! - Moving transfers the state. `std::mem::take` leaves the source as a
//!   default-seeded engine.
//! - Third-party bindings (see `crate::gsl`) only ever borrow the state; the
//!   engine cannot be dropped or moved while a binding is alive.
//!
//! # Parallel Use
//!
//! There is no internal synchronization. Give every execution context its
//! own engine built with a distinct worker index.

use crate::rng::checkpoint::EngineCheckpoint;
use crate::rng::contract::RandomBitGenerator;
use crate::rng::state::XoroshiroState;
use crate::rng::xoroshiro::{initial_state, substreams};
use serde::{Deserialize, Serialize};

/// Deterministic xoroshiro128+ engine
///
/// # Example
/// ```
/// use xoroshiro_core_rs::XoroshiroEngine;
///
/// let mut rng = XoroshiroEngine::new(42, 0);
/// let value = rng.next_u64();
/// assert_eq!(value, 0xe6c7_1559_e252_5f98);
/// ```
///
/// Serde goes through [`EngineCheckpoint`](crate::EngineCheckpoint), so a
/// deserialized engine has passed the same checks as
/// [`XoroshiroEngine::restore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "EngineCheckpoint", try_from = "EngineCheckpoint")]
pub struct XoroshiroEngine {
    state: XoroshiroState,
    seed_used: u64,
}

impl XoroshiroEngine {
    pub const DEFAULT_SEED: u64 = 42;

    /// Create an engine positioned at the start of substream `worker_index`.
    ///
    /// Never fails, including for a zero seed.
    pub fn new(seed: u64, worker_index: u64) -> Self {
        log::debug!("Seeding xoroshiro engine: seed={} worker={}", seed, worker_index);
        Self {
            state: initial_state(seed, worker_index),
            seed_used: seed,
        }
    }

    /// One engine per worker `0..count`, all from the same seed.
    pub fn for_workers(seed: u64, count: usize) -> Vec<Self> {
        log::debug!("Seeding {} xoroshiro substreams from seed={}", count, seed);
        substreams(seed, count)
            .into_iter()
            .map(|state| Self {
                state,
                seed_used: seed,
            })
            .collect()
    }

    /// Rebuild an engine from previously captured parts.
    pub(crate) fn from_parts(seed_used: u64, state: XoroshiroState) -> Self {
        Self { state, seed_used }
    }

    /// Hard reset to substream `worker_index` of `seed`.
    pub fn seed(&mut self, seed: u64, worker_index: u64) {
        *self = Self::new(seed, worker_index);
    }

    /// Return the next raw output and advance the state.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state.step()
    }

    /// Skip ahead by 2^64 outputs.
    pub fn jump(&mut self) {
        self.state.jump();
    }

    /// The seed last passed to [`XoroshiroEngine::new`] or
    /// [`XoroshiroEngine::seed`].
    pub fn seed_used(&self) -> u64 {
        self.seed_used
    }

    /// Current state (for checkpointing/replay)
    pub fn state(&self) -> XoroshiroState {
        self.state
    }

    /// Overwrite the current state, keeping the recorded seed.
    ///
    /// The state is taken as-is. An all-zero state is accepted but logged,
    /// since the generator then emits zeros forever.
    pub fn set_state(&mut self, state: XoroshiroState) {
        if state.is_degenerate() {
            log::warn!("Assigning all-zero xoroshiro state; every further output will be zero");
        }
        self.state = state;
    }

    /// Infinite stream of raw outputs, borrowing the engine.
    pub fn iter(&mut self) -> impl Iterator<Item = u64> + '_ {
        std::iter::from_fn(move || Some(self.state.step()))
    }

    #[cfg_attr(not(feature = "gsl"), allow(dead_code))]
    pub(crate) fn state_mut(&mut self) -> &mut XoroshiroState {
        &mut self.state
    }
}

impl Default for XoroshiroEngine {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED, 0)
    }
}

impl RandomBitGenerator for XoroshiroEngine {
    const MIN: u64 = <XoroshiroState as RandomBitGenerator>::MIN;
    const MAX: u64 = <XoroshiroState as RandomBitGenerator>::MAX;

    fn seed(&mut self, seed: u64, worker_index: u64) {
        XoroshiroEngine::seed(self, seed, worker_index);
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        XoroshiroEngine::next_u64(self)
    }
}
