//! zstd-bridge-core
//!
//! One-shot zstd compress/decompress for scripting hosts.
//! No Python, no PyO3, no FFI. Hosts plug in through `value::HostValue`.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Layers: value adapter -> codec sessions -> bridge operations
pub mod value;
pub mod codec;
pub mod bridge;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::bridge::{compress, compress_with, decompress, decompress_with};
    pub use crate::codec::{live_sessions, FrameCodec, ZstdCodec};
    pub use crate::types::{BridgeError, ErrorKind, SessionKind};
    pub use crate::value::{extract, ByteSequence, HostValue, ScriptValue};
}
