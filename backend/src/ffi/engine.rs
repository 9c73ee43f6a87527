//! PyO3 wrapper for XoroshiroEngine
//!
//! # Example (from Python)
//!
//! ```python
//! from xoroshiro_core_rs import Xoroshiro
//!
//! rng = Xoroshiro(42)
//! worker = Xoroshiro(42, worker_index=3)
//! x = rng.uniform(-1.0, 1.0)
//! saved = rng.checkpoint_json()
//! resumed = Xoroshiro.from_checkpoint_json(saved)
//! assert resumed.next_u64() == rng.next_u64()
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{parse_engine_config, rng_error_to_py};
use crate::rng::{EngineCheckpoint, XoroshiroEngine, XoroshiroState};
use crate::sampling;

/// Python wrapper for the Rust engine
///
/// Each Python object owns its own engine. Python never receives a
/// reference into Rust state.
#[pyclass(name = "Xoroshiro")]
pub struct PyXoroshiro {
    inner: XoroshiroEngine,
}

#[pymethods]
impl PyXoroshiro {
    #[new]
    #[pyo3(signature = (seed = XoroshiroEngine::DEFAULT_SEED, worker_index = 0))]
    fn new(seed: u64, worker_index: u64) -> Self {
        PyXoroshiro {
            inner: XoroshiroEngine::new(seed, worker_index),
        }
    }

    /// Build from a config dict with optional `seed` and `worker_index`.
    #[staticmethod]
    fn from_config(config: &Bound<'_, PyDict>) -> PyResult<Self> {
        let config = parse_engine_config(config)?;
        Ok(PyXoroshiro {
            inner: config.build(),
        })
    }

    /// Restore from `checkpoint_json()` output.
    ///
    /// Raises ValueError on malformed JSON, a stale fingerprint, or an
    /// all-zero state.
    #[staticmethod]
    fn from_checkpoint_json(json: &str) -> PyResult<Self> {
        let checkpoint = EngineCheckpoint::from_json(json).map_err(rng_error_to_py)?;
        let inner = XoroshiroEngine::restore(&checkpoint).map_err(rng_error_to_py)?;
        Ok(PyXoroshiro { inner })
    }

    #[pyo3(signature = (seed, worker_index = 0))]
    fn seed(&mut self, seed: u64, worker_index: u64) {
        self.inner.seed(seed, worker_index);
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn next_f64(&mut self) -> f64 {
        sampling::unit_f64(&mut self.inner)
    }

    fn next_bool(&mut self) -> bool {
        sampling::boolean(&mut self.inner)
    }

    /// Real value in `[lower, upper)`.
    fn uniform(&mut self, lower: f64, upper: f64) -> PyResult<f64> {
        if !(lower < upper && lower.is_finite() && upper.is_finite()) {
            return Err(PyValueError::new_err(format!(
                "Invalid interval [{}, {})",
                lower, upper
            )));
        }
        Ok(sampling::uniform(&mut self.inner, lower, upper))
    }

    fn jump(&mut self) {
        self.inner.jump();
    }

    fn seed_used(&self) -> u64 {
        self.inner.seed_used()
    }

    /// `(lower, upper)` state words.
    fn get_state(&self) -> (u64, u64) {
        let state = self.inner.state();
        (state.lower, state.upper)
    }

    fn set_state(&mut self, lower: u64, upper: u64) {
        self.inner.set_state(XoroshiroState::from_words(lower, upper));
    }

    fn checkpoint_json(&self) -> PyResult<String> {
        self.inner.checkpoint().to_json().map_err(rng_error_to_py)
    }

    fn __repr__(&self) -> String {
        let state = self.inner.state();
        format!(
            "Xoroshiro(seed={}, state=({:#018x}, {:#018x}))",
            self.inner.seed_used(),
            state.lower,
            state.upper
        )
    }
}
