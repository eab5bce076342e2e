//! bridge.rs
//! The two operations a host exposes to scripts.
//!
//! Each call: extract bytes from the host value, run one codec session, hand back
//! the result. A failure at any step aborts the call and leaves nothing behind.

use log::{debug, log, Level};

use crate::codec::{FrameCodec, ZstdCodec};
use crate::constants::LOG_TARGET;
use crate::types::{BridgeError, ErrorKind, Result};
use crate::value::{extract, HostValue};

#[derive(Copy, Clone, Debug)]
enum Op {
    Compress,
    Decompress,
}

impl Op {
    fn as_str(self) -> &'static str {
        match self {
            Op::Compress => "compress",
            Op::Decompress => "decompress",
        }
    }
}

/// Compress a host value holding raw bytes into one zstd frame.
pub fn compress<V: HostValue + ?Sized>(value: &V) -> Result<Vec<u8>> {
    compress_with(&ZstdCodec, value)
}

/// Decompress a host value holding one or more complete zstd frames.
pub fn decompress<V: HostValue + ?Sized>(value: &V) -> Result<Vec<u8>> {
    decompress_with(&ZstdCodec, value)
}

/// `compress` with an explicit codec.
pub fn compress_with<C, V>(codec: &C, value: &V) -> Result<Vec<u8>>
where
    C: FrameCodec + ?Sized,
    V: HostValue + ?Sized,
{
    run(codec, value, Op::Compress)
}

/// `decompress` with an explicit codec.
pub fn decompress_with<C, V>(codec: &C, value: &V) -> Result<Vec<u8>>
where
    C: FrameCodec + ?Sized,
    V: HostValue + ?Sized,
{
    run(codec, value, Op::Decompress)
}

/// Log level for a failed call.
/// Bad input is routine for a library serving scripts; only environment and
/// encoder faults are worth a warning.
pub fn failure_level(e: &BridgeError) -> Level {
    match e.kind() {
        ErrorKind::TypeMismatch | ErrorKind::Decode => Level::Debug,
        ErrorKind::CodecInit | ErrorKind::Encode => Level::Warn,
    }
}

fn run<C, V>(codec: &C, value: &V, op: Op) -> Result<Vec<u8>>
where
    C: FrameCodec + ?Sized,
    V: HostValue + ?Sized,
{
    let outcome = extract(value).and_then(|input| {
        let out = match op {
            Op::Compress => codec.compress(&input),
            Op::Decompress => codec.decompress(&input),
        }?;
        Ok((input.len(), out))
    });

    match outcome {
        Ok((in_len, out)) => {
            debug!(
                target: LOG_TARGET,
                "{} {}: {} -> {} bytes",
                codec.name(),
                op.as_str(),
                in_len,
                out.len()
            );
            Ok(out)
        }
        Err(e) => {
            log!(
                target: LOG_TARGET,
                failure_level(&e),
                "{} {} failed: {}",
                codec.name(),
                op.as_str(),
                e
            );
            Err(e)
        }
    }
}
