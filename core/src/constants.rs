//! constants.rs
//! Fixed codec parameters. None of these are exposed as configuration.

/// Compression level handed to every encoder session (the zstd library default).
pub const DEFAULT_LEVEL: i32 = zstd::DEFAULT_COMPRESSION_LEVEL;

/// Frame magic number of a zstd frame, little-endian on the wire.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Frame flags written by every encoder session.
pub mod frame_flags {
    /// Append the 32-bit content checksum to every frame.
    pub const CONTENT_CHECKSUM: bool = true;
    /// Record the plaintext length in the frame header.
    pub const CONTENT_SIZE: bool = true;
}

/// Upper bound for output capacity reserved from a frame's declared content size (8 MiB).
/// Larger outputs still decode, the buffer just grows as it goes.
pub const MAX_PREALLOC: usize = 8 * 1024 * 1024;

/// Log target used by every record emitted from the bridge.
pub const LOG_TARGET: &str = "zstd_bridge";
