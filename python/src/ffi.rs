//! ffi.rs
//! Module functions and the `Compression` entry point.
//!
//! Bytes are extracted while holding the GIL; the codec runs with the GIL
//! released so independent Python threads compress in parallel.

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use zstd_bridge_core::bridge;
use zstd_bridge_core::constants::LOG_TARGET;
use zstd_bridge_core::types::Result as BridgeResult;
use zstd_bridge_core::value::extract;

use crate::errors::into_py_err;
use crate::value::PyHostValue;

type Operation = fn(&[u8]) -> BridgeResult<Vec<u8>>;

fn run<'py>(py: Python<'py>, data: &Bound<'py, PyAny>, op: Operation) -> PyResult<Bound<'py, PyBytes>> {
    let value = PyHostValue::new(data);
    let input = extract(&value).map_err(|e| {
        log::log!(target: LOG_TARGET, bridge::failure_level(&e), "{}", e);
        into_py_err(e)
    })?;
    let input: &[u8] = &input;

    let out = py.allow_threads(|| op(input)).map_err(into_py_err)?;
    Ok(PyBytes::new_bound(py, &out))
}

fn compress_bytes(input: &[u8]) -> BridgeResult<Vec<u8>> {
    bridge::compress(input)
}

fn decompress_bytes(input: &[u8]) -> BridgeResult<Vec<u8>> {
    bridge::decompress(input)
}

/// Compress a bytes-like object into one zstd frame.
///
/// Raises:
///     TypeError: `data` is not bytes, bytearray or a byte buffer.
///     CodecInitError: the encoder could not be created.
///     EncodeError: the encoder failed.
#[pyfunction]
#[pyo3(name = "compress")]
fn compress_py<'py>(py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyBytes>> {
    run(py, data, compress_bytes)
}

/// Decompress a bytes-like object holding complete zstd frames.
///
/// Raises:
///     TypeError: `data` is not bytes, bytearray or a byte buffer.
///     CodecInitError: the decoder could not be created.
///     DecodeError: `data` is not a valid zstd frame.
#[pyfunction]
#[pyo3(name = "decompress")]
fn decompress_py<'py>(py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyBytes>> {
    run(py, data, decompress_bytes)
}

/// Alias of `compress`.
#[pyfunction]
#[pyo3(name = "zstd_compress")]
fn zstd_compress_py<'py>(py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyBytes>> {
    run(py, data, compress_bytes)
}

/// Alias of `decompress`.
#[pyfunction]
#[pyo3(name = "zstd_decompress")]
fn zstd_decompress_py<'py>(py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyBytes>> {
    run(py, data, decompress_bytes)
}

/// Stateless entry point carrying both operations.
/// The module exposes one instance as `default`.
#[pyclass(frozen, module = "zstd_bridge")]
pub struct Compression;

#[pymethods]
impl Compression {
    #[new]
    fn new() -> Self {
        Self
    }

    fn compress<'py>(&self, py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyBytes>> {
        run(py, data, compress_bytes)
    }

    fn decompress<'py>(&self, py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyBytes>> {
        run(py, data, decompress_bytes)
    }

    fn zstd_compress<'py>(&self, py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyBytes>> {
        run(py, data, compress_bytes)
    }

    fn zstd_decompress<'py>(&self, py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyBytes>> {
        run(py, data, decompress_bytes)
    }

    fn __repr__(&self) -> &'static str {
        "Compression(codec='zstd')"
    }
}

pub(crate) fn register(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compress_py, m)?)?;
    m.add_function(wrap_pyfunction!(decompress_py, m)?)?;
    m.add_function(wrap_pyfunction!(zstd_compress_py, m)?)?;
    m.add_function(wrap_pyfunction!(zstd_decompress_py, m)?)?;
    m.add_class::<Compression>()?;
    m.add("default", Py::new(py, Compression)?)?;
    Ok(())
}
