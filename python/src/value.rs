//! value.rs
//! `HostValue` for Python objects.
//!
//! - `bytes` is immutable and borrowed as-is.
//! - `bytearray` and other byte buffers (`memoryview`, `array('B')`, ...) are
//!   copied, since Python code may mutate them while the GIL is released.
//! - Other buffers must have an unsigned-byte item format (`'B'`, or no format).
//!   Signed-byte buffers such as `memoryview(array('b', ...))` are rejected, as
//!   are wider items (`array('i')`).
//! - `str`, numbers, `None` and containers are never accepted.

use std::borrow::Cow;

use pyo3::buffer::PyBuffer;
use pyo3::prelude::*;
use pyo3::types::{PyByteArray, PyBytes, PyString};

use zstd_bridge_core::value::{ByteSequence, HostValue};

pub(crate) struct PyHostValue<'a, 'py> {
    obj: &'a Bound<'py, PyAny>,
}

impl<'a, 'py> PyHostValue<'a, 'py> {
    pub(crate) fn new(obj: &'a Bound<'py, PyAny>) -> Self {
        Self { obj }
    }
}

impl HostValue for PyHostValue<'_, '_> {
    fn as_byte_sequence(&self) -> Option<ByteSequence<'_>> {
        // str does not export a buffer; rejected up front so text never slips through.
        if self.obj.is_instance_of::<PyString>() {
            return None;
        }
        if let Ok(b) = self.obj.downcast::<PyBytes>() {
            return Some(Cow::Borrowed(b.as_bytes()));
        }
        if let Ok(b) = self.obj.downcast::<PyByteArray>() {
            return Some(Cow::Owned(b.to_vec()));
        }
        PyBuffer::<u8>::get_bound(self.obj)
            .and_then(|buf| buf.to_vec(self.obj.py()))
            .ok()
            .map(Cow::Owned)
    }

    fn shape(&self) -> Cow<'_, str> {
        match self.obj.get_type().qualname() {
            Ok(name) => Cow::Owned(name.to_string()),
            Err(_) => Cow::Borrowed("object"),
        }
    }
}
