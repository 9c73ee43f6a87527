//! Engine configuration
//!
//! Carried inside larger serde configs the same way a simulation carries its
//! `rng_seed`. Missing fields fall back to the default seed and worker 0.

use crate::rng::{RngError, XoroshiroEngine};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Shared seed for every worker
    pub seed: u64,

    /// Substream index of this execution context
    pub worker_index: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: XoroshiroEngine::DEFAULT_SEED,
            worker_index: 0,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, RngError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build(&self) -> XoroshiroEngine {
        XoroshiroEngine::new(self.seed, self.worker_index)
    }

    /// Same seed, different worker.
    pub fn for_worker(&self, worker_index: u64) -> Self {
        Self {
            worker_index,
            ..*self
        }
    }
}
