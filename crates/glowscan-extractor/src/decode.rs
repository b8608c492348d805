//! Decode region content as JSON, keeping the raw text when it is not valid JSON

use crate::config::ExtractorConfig;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

/// Value stored for one extracted region
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Successfully decoded JSON
    Json(Value),
    /// Trimmed region text that failed to decode
    Raw(String),
}

impl Payload {
    /// Whether this is undecoded fallback text
    pub fn is_raw(&self) -> bool {
        matches!(self, Payload::Raw(_))
    }

    /// Decoded JSON, if any
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Raw(_) => None,
        }
    }

    /// Payload as a JSON value; raw text becomes a JSON string
    pub fn to_value(&self) -> Value {
        match self {
            Payload::Json(value) => value.clone(),
            Payload::Raw(text) => Value::String(text.clone()),
        }
    }

    /// One-line description of the payload's shape
    pub fn summary(&self) -> String {
        match self {
            Payload::Json(value) => describe(value),
            Payload::Raw(text) => format!("raw text ({} chars)", text.chars().count()),
        }
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Object(map) => format!("object with {} keys", map.len()),
        Value::Array(items) => format!("array with {} items", items.len()),
        Value::String(s) => format!("string ({} chars)", s.chars().count()),
        Value::Number(_) => "number".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Null => "null".to_string(),
    }
}

/// First `max_chars` characters of `content`
fn preview(content: &str, max_chars: usize) -> &str {
    match content.char_indices().nth(max_chars) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}

/// Decode the content of `script_id`'s region.
///
/// Returns the output key and payload. Content that is not valid JSON is kept
/// verbatim under the raw key; this never fails.
pub fn decode_region(
    config: &ExtractorConfig,
    script_id: &str,
    content: &str,
) -> (String, Payload) {
    match serde_json::from_str::<Value>(content) {
        Ok(value) => {
            let payload = Payload::Json(value);
            info!("Extracted {}: {}", script_id, payload.summary());
            (config.output_key(script_id), payload)
        }
        Err(e) => {
            warn!(
                "Failed to parse JSON in {}: {}. Content preview: {}...",
                script_id,
                e,
                preview(content, config.preview_chars)
            );
            (config.raw_key(script_id), Payload::Raw(content.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_object_decodes() {
        let config = ExtractorConfig::default();
        let (key, payload) = decode_region(&config, "headerJson", r#"{"a":1}"#);
        assert_eq!(key, "header");
        assert_eq!(payload, Payload::Json(json!({"a": 1})));
        assert!(!payload.is_raw());
    }

    #[test]
    fn test_scalars_decode() {
        let config = ExtractorConfig::default();
        let (_, payload) = decode_region(&config, "headerJson", "null");
        assert_eq!(payload.as_json(), Some(&Value::Null));
        let (_, payload) = decode_region(&config, "headerJson", "\"text\"");
        assert_eq!(payload.as_json(), Some(&json!("text")));
    }

    #[test]
    fn test_invalid_json_falls_back_to_raw() {
        let config = ExtractorConfig::default();
        let content = "{not: json,}";
        let (key, payload) = decode_region(&config, "sharedQueryTextsJson", content);
        assert_eq!(key, "shared_query_texts_raw");
        assert_eq!(payload, Payload::Raw(content.to_string()));
        assert!(payload.as_json().is_none());
    }

    #[test]
    fn test_trailing_garbage_is_not_json() {
        let config = ExtractorConfig::default();
        let (key, payload) = decode_region(&config, "entriesJson", "[1,2] trailing");
        assert_eq!(key, "entries_raw");
        assert!(payload.is_raw());
    }

    #[test]
    fn test_summaries() {
        assert_eq!(Payload::Json(json!({"a": 1, "b": 2})).summary(), "object with 2 keys");
        assert_eq!(Payload::Json(json!([1, 2, 3])).summary(), "array with 3 items");
        assert_eq!(Payload::Json(json!("héllo")).summary(), "string (5 chars)");
        assert_eq!(Payload::Json(json!(4.5)).summary(), "number");
        assert_eq!(Payload::Json(json!(false)).summary(), "boolean");
        assert_eq!(Payload::Json(Value::Null).summary(), "null");
        assert_eq!(Payload::Raw("abc".to_string()).summary(), "raw text (3 chars)");
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        assert_eq!(preview("héllo wörld", 4), "héll");
        assert_eq!(preview("short", 100), "short");
    }

    #[test]
    fn test_payload_serializes_untagged() {
        let json_payload = Payload::Json(json!({"a": [1]}));
        let raw_payload = Payload::Raw("oops".to_string());
        assert_eq!(serde_json::to_string(&json_payload).unwrap(), r#"{"a":[1]}"#);
        assert_eq!(serde_json::to_string(&raw_payload).unwrap(), r#""oops""#);
        assert_eq!(raw_payload.to_value(), json!("oops"));
    }
}
