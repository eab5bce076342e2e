// Sessions are released on every exit path.
// Kept to a single test: the live-session counter is process-wide and the
// harness runs tests of one binary in parallel.

#[cfg(test)]
mod tests {
    use zstd_bridge_core::{
        bridge::{compress, decompress},
        codec::{live_sessions, ZstdDecoderSession, ZstdEncoderSession},
        value::ScriptValue,
    };

    #[test]
    fn sessions_are_released_on_success_and_failure() {
        assert_eq!(live_sessions(), 0);

        // Held session is counted until dropped.
        let enc = ZstdEncoderSession::open(3).unwrap();
        assert_eq!(live_sessions(), 1);
        let frame = enc.encode_frame(b"abc").unwrap();
        assert_eq!(live_sessions(), 0);

        let dec = ZstdDecoderSession::open(&frame).unwrap();
        assert_eq!(live_sessions(), 1);
        drop(dec);
        assert_eq!(live_sessions(), 0);

        // Encoder fails mid-call: pledged size does not match what is written.
        let enc = ZstdEncoderSession::open(1).unwrap();
        assert!(enc.encode_frame(b"more than one byte").is_err());
        assert_eq!(live_sessions(), 0);

        // Decoder fails mid-call on a checksum mismatch.
        let mut corrupt = compress(&b"checksum guarded payload"[..]).unwrap();
        let last = corrupt.len() - 1;
        corrupt[last] ^= 0xFF;
        let dec = ZstdDecoderSession::open(&corrupt).unwrap();
        assert!(dec.decode_frames(0).is_err());
        assert_eq!(live_sessions(), 0);

        // Bridge calls across every outcome.
        for _ in 0..100 {
            let frame = compress(&b"payload"[..]).unwrap();
            assert_eq!(decompress(&frame).unwrap(), b"payload");
            assert!(decompress(&corrupt).is_err());
            assert!(decompress(&b"junk"[..]).is_err());
            assert!(compress(&ScriptValue::Null).is_err());
        }
        assert_eq!(live_sessions(), 0);
    }
}
