//! value/mod.rs
//! Value adapter: opaque host value -> immutable byte sequence.
//!
//! Notes:
//! - The core never sees a host's value representation; hosts implement `HostValue`.
//! - Only values the host already treats as raw bytes are accepted. Text, numbers
//!   and structured values are never coerced.
//! - Borrow when the host guarantees immutability, copy otherwise.

use std::borrow::Cow;

use crate::types::{BridgeError, Result};

pub mod script;

pub use script::ScriptValue;

/// Immutable bytes handed into the codec; borrowed from the host value when possible.
pub type ByteSequence<'a> = Cow<'a, [u8]>;

/// Capability a host runtime provides for its values.
pub trait HostValue {
    /// The host's own notion of "this value denotes raw bytes".
    /// Returns `None` for every other shape.
    fn as_byte_sequence(&self) -> Option<ByteSequence<'_>>;

    /// Short type name of the value, used in mismatch messages.
    fn shape(&self) -> Cow<'_, str>;
}

/// Extract the byte sequence behind `value`, or fail with `TypeMismatch`.
pub fn extract<V: HostValue + ?Sized>(value: &V) -> Result<ByteSequence<'_>> {
    value.as_byte_sequence().ok_or_else(|| BridgeError::TypeMismatch {
        found: value.shape().into_owned(),
    })
}

impl HostValue for [u8] {
    fn as_byte_sequence(&self) -> Option<ByteSequence<'_>> {
        Some(Cow::Borrowed(self))
    }

    fn shape(&self) -> Cow<'_, str> {
        Cow::Borrowed("bytes")
    }
}

impl HostValue for Vec<u8> {
    fn as_byte_sequence(&self) -> Option<ByteSequence<'_>> {
        Some(Cow::Borrowed(self.as_slice()))
    }

    fn shape(&self) -> Cow<'_, str> {
        Cow::Borrowed("bytes")
    }
}

impl HostValue for bytes::Bytes {
    fn as_byte_sequence(&self) -> Option<ByteSequence<'_>> {
        Some(Cow::Borrowed(&self[..]))
    }

    fn shape(&self) -> Cow<'_, str> {
        Cow::Borrowed("bytes")
    }
}
