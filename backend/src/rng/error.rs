//! Error types for the checkpoint boundary
//!
//! The generator itself never fails: seeding, stepping, and jumping are
//! defined for every input. Errors only arise when decoding state that came
//! from outside the process.

use thiserror::Error;

/// Errors raised while saving or restoring generator state
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RngError {
    #[error("Checkpoint decodes to the all-zero state, which never leaves zero")]
    DegenerateState,

    #[error("Invalid checkpoint length: expected {expected} bytes, got {actual}")]
    InvalidCheckpointLength { expected: usize, actual: usize },

    #[error("Checkpoint fingerprint mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RngError {
    fn from(err: serde_json::Error) -> Self {
        RngError::Serialization(err.to_string())
    }
}
