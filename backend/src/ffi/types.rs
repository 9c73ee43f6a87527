//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::EngineConfig;
use crate::rng::RngError;

/// Map a generator error to a Python `ValueError`.
pub fn rng_error_to_py(err: RngError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Extract a field with a default value if missing.
///
/// # Errors
/// Returns PyValueError only if the field is present but not convertible.
fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract().map_err(|_| {
            PyValueError::new_err(format!("Field '{}' has the wrong type", key))
        }),
        None => Ok(default),
    }
}

/// Parse an engine config dict: `{"seed": int, "worker_index": int}`.
///
/// Both keys are optional.
pub fn parse_engine_config(dict: &Bound<'_, PyDict>) -> PyResult<EngineConfig> {
    let defaults = EngineConfig::default();
    Ok(EngineConfig {
        seed: extract_with_default(dict, "seed", defaults.seed)?,
        worker_index: extract_with_default(dict, "worker_index", defaults.worker_index)?,
    })
}
