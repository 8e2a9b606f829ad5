//! Action resolution for inbound message bodies.
//!
//! Parsing is lenient: a body that is not a JSON object, or whose `action`
//! field is missing or not a string, resolves to [`DEFAULT_ACTION`]. Parse
//! failures are never surfaced.
//!
//! # Example
//!
//! ```
//! use easydict_native_bridge::action::{resolve_action, DEFAULT_ACTION};
//!
//! assert_eq!(resolve_action(br#"{"action":"ocr-translate"}"#), "ocr-translate");
//! assert_eq!(resolve_action(br#"{"action":"other"}"#), "other");
//! assert_eq!(resolve_action(b"not json"), DEFAULT_ACTION);
//! ```

use serde_json::{Map, Value};

/// Action used when the body does not name one.
pub const DEFAULT_ACTION: &str = "ocr-translate";

/// Name of the only field consulted in inbound documents.
pub const ACTION_FIELD: &str = "action";

/// A parsed inbound document.
pub type Document = Map<String, Value>;

/// Parse a body as a JSON object.
///
/// Returns `None` for invalid UTF-8, invalid JSON, or any non-object value.
pub fn try_parse(body: &[u8]) -> Option<Document> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!("Body is not valid JSON: {}", e);
            None
        }
    }
}

/// Extract the action from a parsed document, falling back to the default.
pub fn extract_action(document: Option<&Document>) -> String {
    document
        .and_then(|doc| doc.get(ACTION_FIELD))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_ACTION)
        .to_string()
}

/// Resolve the action named by an inbound body.
pub fn resolve_action(body: &[u8]) -> String {
    extract_action(try_parse(body).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_action_is_returned_verbatim() {
        for action in ["ocr-translate", "unknown-thing", "", "  spaced  ", "翻訳"] {
            let body = serde_json::json!({ "action": action }).to_string();
            assert_eq!(resolve_action(body.as_bytes()), action);
        }
    }

    #[test]
    fn test_empty_document_uses_default() {
        assert_eq!(resolve_action(b"{}"), DEFAULT_ACTION);
    }

    #[test]
    fn test_unparseable_bodies_use_default() {
        let bodies: [&[u8]; 5] = [b"", b"{", b"not json", b"\xff\xfe{}", b"{\"action\":}"];
        for body in bodies {
            assert!(try_parse(body).is_none());
            assert_eq!(resolve_action(body), DEFAULT_ACTION);
        }
    }

    #[test]
    fn test_non_object_documents_use_default() {
        let bodies: [&[u8]; 4] = [b"[\"other\"]", b"\"other\"", b"42", b"null"];
        for body in bodies {
            assert!(try_parse(body).is_none());
            assert_eq!(resolve_action(body), DEFAULT_ACTION);
        }
    }

    #[test]
    fn test_non_string_action_uses_default() {
        let bodies: [&[u8]; 4] = [
            br#"{"action":null}"#,
            br#"{"action":7}"#,
            br#"{"action":{"name":"x"}}"#,
            br#"{"action":["x"]}"#,
        ];
        for body in bodies {
            assert_eq!(resolve_action(body), DEFAULT_ACTION);
        }
    }

    #[test]
    fn test_other_fields_are_ignored() {
        let body = br#"{"text":"hello","action":"ocr-translate","extra":[1,2,3]}"#;
        let doc = try_parse(body).unwrap();
        assert_eq!(doc.len(), 3);
        assert_eq!(extract_action(Some(&doc)), "ocr-translate");
    }

    #[test]
    fn test_field_name_is_case_sensitive() {
        assert_eq!(resolve_action(br#"{"Action":"other"}"#), DEFAULT_ACTION);
    }
}
