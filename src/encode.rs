//! Payload encoding for message bodies.
//!
//! Two encoding conventions coexist: body-stream construction always
//! JSON-encodes (a bare string gains quotes), while a framework payload
//! rendered at emission time passes strings through untouched.

use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

use crate::core::{Error, Result};

/// JSON-encode any serializable value into a body buffer.
///
/// Strings encode with quotes, integers to their digits, floats to their
/// canonical decimal form. Used wherever a value becomes a body stream,
/// including the server-request form body.
pub fn json_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    let encoded = serde_json::to_vec(value).map_err(Error::Encoding)?;
    Ok(Bytes::from(encoded))
}

/// Render a framework payload as body text.
///
/// A string payload is already serialized and passes through unchanged;
/// every other shape is JSON-encoded.
pub fn payload_text(value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        other => serde_json::to_string(other).map_err(Error::Encoding),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_bytes_scalars() {
        assert_eq!(json_bytes("STRING").unwrap().as_ref(), b"\"STRING\"");
        assert_eq!(json_bytes(&42).unwrap().as_ref(), b"42");
        assert_eq!(json_bytes(&4.2).unwrap().as_ref(), b"4.2");
    }

    #[test]
    fn test_json_bytes_mapping() {
        let encoded = json_bytes(&json!({ "key": "value" })).unwrap();
        assert_eq!(encoded.as_ref(), br#"{"key":"value"}"#);
    }

    #[test]
    fn test_json_bytes_derived_struct() {
        #[derive(Serialize)]
        struct Payload {
            key: &'static str,
        }

        let encoded = json_bytes(&Payload { key: "value" }).unwrap();
        assert_eq!(encoded.as_ref(), br#"{"key":"value"}"#);
    }

    #[test]
    fn test_payload_text_string_passthrough() {
        assert_eq!(payload_text(&json!("raw body")).unwrap(), "raw body");
    }

    #[test]
    fn test_payload_text_structured() {
        assert_eq!(
            payload_text(&json!({ "key": "value" })).unwrap(),
            r#"{"key":"value"}"#
        );
        assert_eq!(payload_text(&json!([1, 2, 3])).unwrap(), "[1,2,3]");
        assert_eq!(payload_text(&json!(42)).unwrap(), "42");
        assert_eq!(payload_text(&json!(4.2)).unwrap(), "4.2");
    }
}
