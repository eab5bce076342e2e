//! codec/mod.rs
//! One-shot frame codecs driven through per-call sessions.
//!
//! Notes:
//! - Every call opens its own encoder/decoder session and releases it on return.
//! - Sessions are never pooled, so no frame or window state crosses calls.

pub mod session;
pub mod types;
pub mod zstd;

pub use session::live_sessions;
pub use types::FrameCodec;
pub use self::zstd::{ZstdCodec, ZstdDecoderSession, ZstdEncoderSession};
