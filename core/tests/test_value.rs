#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::collections::BTreeMap;

    use zstd_bridge_core::{
        bridge::{compress, decompress},
        types::{BridgeError, ErrorKind},
        value::{extract, ByteSequence, HostValue, ScriptValue},
    };

    fn non_byte_values() -> Vec<ScriptValue> {
        let mut obj = BTreeMap::new();
        obj.insert("data".to_string(), ScriptValue::Bytes(vec![1, 2, 3]));
        vec![
            ScriptValue::Null,
            ScriptValue::Bool(true),
            ScriptValue::Number(42.0),
            ScriptValue::from("hello"),
            ScriptValue::Array(vec![ScriptValue::Number(1.0), ScriptValue::Number(2.0)]),
            ScriptValue::Object(obj),
        ]
    }

// # ✅ 1. Byte values pass through unchanged

    #[test]
    fn bytes_value_extracts_borrowed() {
        let v = ScriptValue::from(vec![0u8, 1, 2, 255]);
        let seq = extract(&v).unwrap();
        assert!(matches!(seq, Cow::Borrowed(_)));
        assert_eq!(&*seq, &[0, 1, 2, 255]);
    }

    #[test]
    fn empty_bytes_value_is_accepted() {
        let v = ScriptValue::Bytes(Vec::new());
        assert!(extract(&v).unwrap().is_empty());
    }

// # ❌ 2. Everything else is a type mismatch

    #[test]
    fn non_byte_values_are_rejected() {
        for v in non_byte_values() {
            let err = extract(&v).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeMismatch, "{:?} should be rejected", v);
        }
    }

    #[test]
    fn mismatch_message_names_expected_and_found_shape() {
        let err = extract(&ScriptValue::from("abc")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "type error: expecting a byte array/buffer value, got string"
        );
    }

    #[test]
    fn text_is_not_coerced_even_when_ascii() {
        let text = ScriptValue::from("plain ascii");
        assert!(matches!(compress(&text), Err(BridgeError::TypeMismatch { .. })));
    }

    #[test]
    fn both_operations_reject_before_codec_work() {
        for v in non_byte_values() {
            assert_eq!(compress(&v).unwrap_err().kind(), ErrorKind::TypeMismatch);
            assert_eq!(decompress(&v).unwrap_err().kind(), ErrorKind::TypeMismatch);
        }
    }

// # ✅ 3. Custom hosts plug in through the trait

    /// A host whose buffers are owned elsewhere and must be copied out.
    struct CopyingHost {
        buf: Option<Vec<u8>>,
    }

    impl HostValue for CopyingHost {
        fn as_byte_sequence(&self) -> Option<ByteSequence<'_>> {
            self.buf.as_ref().map(|b| Cow::Owned(b.clone()))
        }

        fn shape(&self) -> Cow<'_, str> {
            match self.buf {
                Some(_) => Cow::Borrowed("Uint8Array"),
                None => Cow::Owned("undefined".to_string()),
            }
        }
    }

    #[test]
    fn custom_host_roundtrips_through_bridge() {
        let host = CopyingHost { buf: Some(b"custom host payload".to_vec()) };
        let frame = compress(&host).unwrap();
        let plain = decompress(&CopyingHost { buf: Some(frame) }).unwrap();
        assert_eq!(plain, b"custom host payload");
    }

    #[test]
    fn custom_host_shape_appears_in_error() {
        let err = compress(&CopyingHost { buf: None }).unwrap_err();
        assert!(err.to_string().ends_with("got undefined"));
    }
}
