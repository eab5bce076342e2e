//! errors.rs
//! Python exception classes for the bridge error taxonomy.
//!
//! `TypeMismatch` maps to the built-in `TypeError`; codec failures share the
//! `ZstdError` base so scripts can catch them together.

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyTypeError};
use pyo3::prelude::*;

use zstd_bridge_core::types::{BridgeError, ErrorKind};

create_exception!(zstd_bridge, ZstdError, PyException, "Base class of every zstd codec failure.");
create_exception!(zstd_bridge, CodecInitError, ZstdError, "Encoder or decoder session could not be created.");
create_exception!(zstd_bridge, EncodeError, ZstdError, "Encoder failed while compressing.");
create_exception!(zstd_bridge, DecodeError, ZstdError, "Input is not a valid zstd frame.");

pub(crate) fn into_py_err(e: BridgeError) -> PyErr {
    let msg = e.to_string();
    match e.kind() {
        ErrorKind::TypeMismatch => PyTypeError::new_err(msg),
        ErrorKind::CodecInit => CodecInitError::new_err(msg),
        ErrorKind::Encode => EncodeError::new_err(msg),
        ErrorKind::Decode => DecodeError::new_err(msg),
    }
}

pub(crate) fn register(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("ZstdError", py.get_type_bound::<ZstdError>())?;
    m.add("CodecInitError", py.get_type_bound::<CodecInitError>())?;
    m.add("EncodeError", py.get_type_bound::<EncodeError>())?;
    m.add("DecodeError", py.get_type_bound::<DecodeError>())?;
    Ok(())
}
