//! Checkpoint - Save/Load Generator State
//!
//! Captures an engine's seed and state so a later process can continue the
//! identical output sequence.
//!
//! # Critical Invariants
//!
//! - **Determinism**: A restored engine produces exactly the draws the
//!   original would have produced next
//! - **Layout**: State words are persisted `lower` first, `upper` second
//! - **Integrity**: JSON checkpoints carry a SHA256 fingerprint of the seed
//!   and the 16-byte state layout and are rejected if it does not match
//! - **Non-degeneracy**: An all-zero state is never restored

use crate::rng::engine::XoroshiroEngine;
use crate::rng::error::RngError;
use crate::rng::state::XoroshiroState;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Serializable engine snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineCheckpoint {
    /// Seed that originally produced the stream
    pub seed: u64,

    /// Lower state word
    pub lower: u64,

    /// Upper state word
    pub upper: u64,

    /// Hex SHA256 of the seed followed by the 16-byte state layout
    pub fingerprint: String,
}

impl EngineCheckpoint {
    /// Snapshot the given seed and state.
    pub fn new(seed: u64, state: XoroshiroState) -> Self {
        Self {
            seed,
            lower: state.lower,
            upper: state.upper,
            fingerprint: compute_state_fingerprint(seed, &state),
        }
    }

    pub fn state(&self) -> XoroshiroState {
        XoroshiroState::from_words(self.lower, self.upper)
    }

    /// Check fingerprint and non-degeneracy.
    pub fn validate(&self) -> Result<(), RngError> {
        let state = self.state();
        if state.is_degenerate() {
            return Err(RngError::DegenerateState);
        }

        let actual = compute_state_fingerprint(self.seed, &state);
        if actual != self.fingerprint {
            return Err(RngError::ChecksumMismatch {
                expected: self.fingerprint.clone(),
                actual,
            });
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, RngError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate a JSON checkpoint.
    pub fn from_json(json: &str) -> Result<Self, RngError> {
        let checkpoint: Self = serde_json::from_str(json)?;
        checkpoint.validate()?;
        log::debug!(
            "Loaded xoroshiro checkpoint: seed={} fingerprint={}",
            checkpoint.seed,
            checkpoint.fingerprint
        );
        Ok(checkpoint)
    }
}

// ============================================================================
// Fingerprint
// ============================================================================

/// Compute the SHA256 fingerprint of a checkpoint.
///
/// Covers the seed (8 bytes, little-endian) and then the state's checkpoint
/// layout, so neither can be edited without detection.
pub fn compute_state_fingerprint(seed: u64, state: &XoroshiroState) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(state.to_bytes());
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// Engine Save/Restore
// ============================================================================

impl XoroshiroEngine {
    /// Capture the current seed and state.
    pub fn checkpoint(&self) -> EngineCheckpoint {
        let checkpoint = EngineCheckpoint::new(self.seed_used(), self.state());
        log::debug!(
            "Saved xoroshiro checkpoint: seed={} fingerprint={}",
            checkpoint.seed,
            checkpoint.fingerprint
        );
        checkpoint
    }

    /// Build an engine that continues from `checkpoint`.
    ///
    /// # Errors
    ///
    /// Fails if the checkpoint is degenerate or its fingerprint is stale.
    pub fn restore(checkpoint: &EngineCheckpoint) -> Result<Self, RngError> {
        checkpoint.validate()?;
        Ok(Self::from_parts(checkpoint.seed, checkpoint.state()))
    }
}

impl From<XoroshiroEngine> for EngineCheckpoint {
    fn from(engine: XoroshiroEngine) -> Self {
        EngineCheckpoint::new(engine.seed_used(), engine.state())
    }
}

impl TryFrom<EngineCheckpoint> for XoroshiroEngine {
    type Error = RngError;

    fn try_from(checkpoint: EngineCheckpoint) -> Result<Self, Self::Error> {
        XoroshiroEngine::restore(&checkpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_deterministic() {
        let state = XoroshiroState::from_words(1, 2);
        assert_eq!(
            compute_state_fingerprint(7, &state),
            compute_state_fingerprint(7, &state)
        );
        assert_eq!(compute_state_fingerprint(7, &state).len(), 64);
    }

    #[test]
    fn test_fingerprint_sensitive_to_word_order() {
        let a = XoroshiroState::from_words(1, 2);
        let b = XoroshiroState::from_words(2, 1);
        assert_ne!(
            compute_state_fingerprint(0, &a),
            compute_state_fingerprint(0, &b)
        );
    }

    #[test]
    fn test_fingerprint_covers_seed() {
        let state = XoroshiroState::from_words(1, 2);
        assert_ne!(
            compute_state_fingerprint(1, &state),
            compute_state_fingerprint(2, &state)
        );
    }

    #[test]
    fn test_validate_rejects_tampered_seed() {
        let mut checkpoint = EngineCheckpoint::new(42, XoroshiroState::from_words(10, 20));
        checkpoint.seed = 7;

        assert!(matches!(
            checkpoint.validate(),
            Err(RngError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_state() {
        let checkpoint = EngineCheckpoint::new(0, XoroshiroState::default());
        assert_eq!(checkpoint.validate(), Err(RngError::DegenerateState));
    }

    #[test]
    fn test_validate_rejects_tampered_words() {
        let mut checkpoint = EngineCheckpoint::new(3, XoroshiroState::from_words(10, 20));
        checkpoint.upper = 21;

        assert!(matches!(
            checkpoint.validate(),
            Err(RngError::ChecksumMismatch { .. })
        ));
    }
}
