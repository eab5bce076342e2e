//! types.rs
//! Error taxonomy shared by the value adapter, the codec sessions and the bridge.

use std::fmt;
use thiserror::Error;

/// Which codec session a `CodecInit` failure refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionKind {
    Encoder,
    Decoder,
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionKind::Encoder => write!(f, "encoder"),
            SessionKind::Decoder => write!(f, "decoder"),
        }
    }
}

/// Unified bridge error.
/// - Every variant aborts the current call and nothing else.
/// - Messages are stable; hosts surface them to scripts verbatim.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Input value is not a byte sequence. Raised before any codec work.
    #[error("type error: expecting a byte array/buffer value, got {found}")]
    TypeMismatch { found: String },

    /// Encoder or decoder session could not be constructed or primed.
    #[error("failed to initialize zstd {session}: {msg}")]
    CodecInit { session: SessionKind, msg: String },

    /// Encoder failed on already-validated bytes.
    #[error("failed to encode data: {0}")]
    Encode(String),

    /// Input is not a valid frame (corrupted, truncated, wrong magic, ...).
    #[error("failed to decode data: {0}")]
    Decode(String),
}

/// Payload-free discriminant of `BridgeError`, for hosts mapping errors onto their own classes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    CodecInit,
    Encode,
    Decode,
}

impl BridgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BridgeError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            BridgeError::CodecInit { .. } => ErrorKind::CodecInit,
            BridgeError::Encode(_) => ErrorKind::Encode,
            BridgeError::Decode(_) => ErrorKind::Decode,
        }
    }

    pub(crate) fn init(session: SessionKind, e: impl fmt::Display) -> Self {
        BridgeError::CodecInit { session, msg: e.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
