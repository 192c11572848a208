//! Gzip-packed JSON decoding

use flate2::read::MultiGzDecoder;
use serde_json::Value;
use std::io::Read;
use crate::errors::{HookError, HookResult};

/// Decompresses a gzip body and parses the result as JSON, without assuming any shape.
pub fn unpack_gzip(raw_body: &[u8]) -> HookResult<Value> {
    let decompressed = gunzip(raw_body)?;
    serde_json::from_slice(&decompressed).map_err(|e| HookError::JsonParse(e.to_string()))
}

/// Decodes every member of a (possibly concatenated) gzip stream. Bytes after a member
/// that do not start another gzip member are an error.
pub fn gunzip(raw_body: &[u8]) -> HookResult<Vec<u8>> {
    if raw_body.is_empty() {
        return Err(HookError::Decompression("empty body".to_string()));
    }

    let mut decoder = MultiGzDecoder::new(raw_body);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| HookError::Decompression(e.to_string()))?;
    Ok(decompressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use serde_json::json;
    use std::io::Write;

    fn gzip(bytes: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(bytes).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn decodes_object_and_array_payloads() {
        let object = unpack_gzip(&gzip(br#"{"data": [1, 2]}"#)).unwrap();
        assert_eq!(object, json!({"data": [1, 2]}));

        let array = unpack_gzip(&gzip(b"[true, null]")).unwrap();
        assert_eq!(array, json!([true, null]));
    }

    #[test]
    fn plain_json_is_a_decompression_error() {
        let err = unpack_gzip(br#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, HookError::Decompression(_)));
    }

    #[test]
    fn empty_body_is_a_decompression_error() {
        assert!(matches!(unpack_gzip(b""), Err(HookError::Decompression(_))));
    }

    #[test]
    fn truncated_gzip_is_a_decompression_error() {
        let packed = gzip(br#"{"data": [{"symbol": "BTC/USDT"}]}"#);
        let truncated = &packed[..packed.len() / 2];
        assert!(matches!(unpack_gzip(truncated), Err(HookError::Decompression(_))));
    }

    #[test]
    fn concatenated_members_are_decoded_as_one_stream() {
        let mut body = gzip(br#"{"data": "#);
        body.extend(gzip(b"[]}"));
        assert_eq!(unpack_gzip(&body).unwrap(), json!({"data": []}));
    }

    #[test]
    fn trailing_garbage_after_member_is_a_decompression_error() {
        let mut body = gzip(br#"{"data": []}"#);
        body.extend_from_slice(b"GARBAGE-NOT-GZIP");
        assert!(matches!(unpack_gzip(&body), Err(HookError::Decompression(_))));
    }

    #[test]
    fn gzip_of_invalid_json_is_a_parse_error() {
        let err = unpack_gzip(&gzip(b"{not json")).unwrap_err();
        assert!(matches!(err, HookError::JsonParse(_)));
    }
}
