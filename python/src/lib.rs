//! zstd-bridge-python
//!
//! Python bindings for zstd-bridge-core (PyO3).

use pyo3::prelude::*;

mod errors;
mod ffi;
mod value;

/// Python module entry point
#[pymodule]
fn zstd_bridge(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    errors::register(py, m)?;
    ffi::register(py, m)?;
    Ok(())
}
