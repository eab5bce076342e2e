//! codec/zstd.rs
//!
//! Zstd one-shot sessions over in-memory buffers.
//!
//! Design notes:
//! - Encoder writes into a Vec sized by the compress bound; finish() closes the frame.
//! - Frames carry a content checksum and the content size, so they decode without
//!   external parameters and corruption is detected rather than passed through.
//! - Decoder input is walked frame by frame before decoding, so truncated input
//!   fails up front instead of yielding a short plaintext.
//! - Errors are mapped into `BridgeError` at the session boundary.

use std::io::{Read, Write};

use ::zstd::stream::read::Decoder;
use ::zstd::stream::write::Encoder;

use crate::codec::session::SessionToken;
use crate::codec::types::FrameCodec;
use crate::constants::{frame_flags, DEFAULT_LEVEL, MAX_PREALLOC};
use crate::types::{BridgeError, Result, SessionKind};

/// Encoder session for exactly one frame.
pub struct ZstdEncoderSession {
    encoder: Encoder<'static, Vec<u8>>,
    _token: SessionToken,
}

impl ZstdEncoderSession {
    /// Open an encoder primed with default parameters for a plaintext of `src_len` bytes.
    ///
    /// # Errors
    /// - `BridgeError::CodecInit` if the context cannot be created or primed.
    pub fn open(src_len: usize) -> Result<Self> {
        let token = SessionToken::acquire(SessionKind::Encoder);
        let init = |e: std::io::Error| BridgeError::init(SessionKind::Encoder, e);

        let sink = Vec::with_capacity(zstd_safe::compress_bound(src_len));
        let mut encoder = Encoder::new(sink, DEFAULT_LEVEL).map_err(init)?;
        encoder.include_checksum(frame_flags::CONTENT_CHECKSUM).map_err(init)?;
        encoder.include_contentsize(frame_flags::CONTENT_SIZE).map_err(init)?;
        encoder.set_pledged_src_size(Some(src_len as u64)).map_err(init)?;

        Ok(Self { encoder, _token: token })
    }

    /// Feed the whole plaintext and finalize the frame.
    pub fn encode_frame(self, input: &[u8]) -> Result<Vec<u8>> {
        let Self { mut encoder, _token } = self;
        encoder
            .write_all(input)
            .map_err(|e| BridgeError::Encode(e.to_string()))?;
        let mut frame = encoder
            .finish()
            .map_err(|e| BridgeError::Encode(e.to_string()))?;
        // The sink was sized for the worst case; hand back only what the frame uses.
        frame.shrink_to_fit();
        Ok(frame)
    }
}

/// Decoder session reading from a borrowed, complete input.
pub struct ZstdDecoderSession<'a> {
    decoder: Decoder<'static, &'a [u8]>,
    _token: SessionToken,
}

impl<'a> ZstdDecoderSession<'a> {
    /// Open a decoder with default parameters over `input`.
    ///
    /// # Errors
    /// - `BridgeError::CodecInit` if the context cannot be created.
    pub fn open(input: &'a [u8]) -> Result<Self> {
        let token = SessionToken::acquire(SessionKind::Decoder);
        let decoder = Decoder::with_buffer(input)
            .map_err(|e| BridgeError::init(SessionKind::Decoder, e))?;
        Ok(Self { decoder, _token: token })
    }

    /// Decode every frame of the input into one plaintext buffer.
    pub fn decode_frames(self, capacity: usize) -> Result<Vec<u8>> {
        let Self { mut decoder, _token } = self;
        let mut out = Vec::with_capacity(capacity);
        decoder
            .read_to_end(&mut out)
            .map_err(|e| BridgeError::Decode(e.to_string()))?;
        Ok(out)
    }
}

/// Walk the frames of `input` and return the summed declared content size.
///
/// Fails on empty input, on bytes that do not start a frame and on a frame cut short.
/// Frames that do not declare their size contribute nothing to the hint.
pub fn scan_frames(input: &[u8]) -> Result<u64> {
    if input.is_empty() {
        return Err(BridgeError::Decode("empty input is not a zstd frame".into()));
    }

    let mut declared: u64 = 0;
    let mut rest = input;
    while !rest.is_empty() {
        let frame_len = zstd_safe::find_frame_compressed_size(rest)
            .map_err(|code| BridgeError::Decode(zstd_safe::get_error_name(code).to_string()))?;
        if let Ok(Some(size)) = zstd_safe::get_frame_content_size(&rest[..frame_len]) {
            declared = declared.saturating_add(size);
        }
        rest = &rest[frame_len..];
    }
    Ok(declared)
}

/// Production codec: zstd with library-default parameters.
#[derive(Copy, Clone, Debug, Default)]
pub struct ZstdCodec;

impl FrameCodec for ZstdCodec {
    fn name(&self) -> &'static str {
        "zstd"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        ZstdEncoderSession::open(input.len())?.encode_frame(input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let declared = scan_frames(input)?;
        let capacity = usize::try_from(declared).unwrap_or(usize::MAX).min(MAX_PREALLOC);
        ZstdDecoderSession::open(input)?.decode_frames(capacity)
    }
}
