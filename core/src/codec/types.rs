//! codec/types.rs

use crate::types::Result;

/// A codec that turns a whole plaintext into one self-contained frame and back.
///
/// Implementations hold no per-call state; `&self` methods may run concurrently.
pub trait FrameCodec: Send + Sync {
    /// Codec name used in log records.
    fn name(&self) -> &'static str;

    /// Compress `input` into a complete, independently decodable frame.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Decode a complete frame (or concatenated frames) back into plaintext.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;
}
