//! Deterministic random number generation
//!
//! Uses the xoroshiro128+ algorithm, seeded through splitmix64, with a jump
//! function for non-overlapping parallel substreams.
//! CRITICAL: Same seed + worker index MUST produce the same sequence.

mod checkpoint;
mod contract;
mod engine;
mod error;
#[cfg(feature = "rand")]
mod rand_compat;
mod splitmix;
mod state;
mod xoroshiro;

pub use checkpoint::{compute_state_fingerprint, EngineCheckpoint};
pub use contract::RandomBitGenerator;
pub use engine::XoroshiroEngine;
pub use error::RngError;
pub use splitmix::SplitMix64;
pub use state::{XoroshiroState, STATE_BYTES};
pub use xoroshiro::{initial_state, substreams};
