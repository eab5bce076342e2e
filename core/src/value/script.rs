//! value/script.rs
//! A minimal dynamic value for embedders that lack their own value model.

use std::borrow::Cow;
use std::collections::BTreeMap;

use super::{ByteSequence, HostValue};

/// Dynamically-typed scripting value.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Bytes(Vec<u8>),
    Array(Vec<ScriptValue>),
    Object(BTreeMap<String, ScriptValue>),
}

impl ScriptValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            ScriptValue::Null => "null",
            ScriptValue::Bool(_) => "boolean",
            ScriptValue::Number(_) => "number",
            ScriptValue::Text(_) => "string",
            ScriptValue::Bytes(_) => "bytes",
            ScriptValue::Array(_) => "array",
            ScriptValue::Object(_) => "object",
        }
    }
}

impl HostValue for ScriptValue {
    fn as_byte_sequence(&self) -> Option<ByteSequence<'_>> {
        match self {
            ScriptValue::Bytes(b) => Some(Cow::Borrowed(b.as_slice())),
            // An array of numbers is not a buffer, even when every element fits in a u8.
            _ => None,
        }
    }

    fn shape(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.type_name())
    }
}

impl From<Vec<u8>> for ScriptValue {
    fn from(b: Vec<u8>) -> Self {
        ScriptValue::Bytes(b)
    }
}

impl From<&[u8]> for ScriptValue {
    fn from(b: &[u8]) -> Self {
        ScriptValue::Bytes(b.to_vec())
    }
}

impl From<&str> for ScriptValue {
    fn from(s: &str) -> Self {
        ScriptValue::Text(s.to_owned())
    }
}

impl From<String> for ScriptValue {
    fn from(s: String) -> Self {
        ScriptValue::Text(s)
    }
}

impl From<f64> for ScriptValue {
    fn from(n: f64) -> Self {
        ScriptValue::Number(n)
    }
}

impl From<bool> for ScriptValue {
    fn from(b: bool) -> Self {
        ScriptValue::Bool(b)
    }
}
