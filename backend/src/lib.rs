//! Xoroshiro Core - Rust Engine
//!
//! Deterministic xoroshiro128+ pseudo-random number generation with
//! jump-ahead substreams for parallel workers.
//!
//! # Architecture
//!
//! - **rng**: State, seed expansion, core step, jump, engine, checkpoints
//! - **sampling**: Bounded reals, booleans, and downstream distributions
//! - **config**: Serde engine configuration
//! - **gsl**: `gsl_rng_type` binding surface (feature `gsl`)
//! - **ffi**: Python bindings (feature `pyo3`)
//!
//! # Critical Invariants
//!
//! 1. Same seed + worker index → same output sequence, bit for bit
//! 2. State is only ever built through the seed expander (never all-zero)
//! 3. Each execution context owns its own engine; nothing is shared
//! 4. Not cryptographically secure

// Module declarations
pub mod config;
pub mod rng;
pub mod sampling;

#[cfg(feature = "gsl")]
pub mod gsl;

// Re-exports for convenience
pub use config::EngineConfig;
pub use rng::{
    initial_state, substreams, EngineCheckpoint, RandomBitGenerator, RngError, SplitMix64,
    XoroshiroEngine, XoroshiroState,
};

#[cfg(feature = "gsl")]
pub use gsl::{GslBinding, GslRng, GslRngType, XOROSHIRO_GSL_RNG_TYPE};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn xoroshiro_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::engine::PyXoroshiro>()?;
    Ok(())
}
