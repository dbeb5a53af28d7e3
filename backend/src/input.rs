//! Parsing of raw request input before any handler logic runs.

use serde_json::{Map, Value};

use crate::error::ApiError;

/// Parses the raw request body as JSON. An empty body reads as an empty
/// object; a non-empty body must parse or the request fails with the fixed
/// 400 envelope.
pub fn read_json_body(raw: &[u8]) -> Result<Value, ApiError> {
    if raw.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(raw).map_err(|_| ApiError::InvalidJson)
}

/// Normalizes a free-text JSON field: absent, null and non-string values all
/// read as empty, and surrounding whitespace never counts as content. A
/// whitespace-only field therefore fails required-field checks exactly like
/// a missing one.
pub fn normalize_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.trim().to_string(),
        _ => String::new(),
    }
}

/// Reads a query parameter as a positive integer identifier. Absent,
/// non-numeric, zero and negative values all come back as 0 so callers
/// reject them with one check.
pub fn positive_id(value: Option<&str>) -> i64 {
    value
        .and_then(|text| text.trim().parse::<i64>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_reads_as_empty_object() {
        let value = read_json_body(b"").unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn malformed_body_is_invalid_json() {
        assert!(matches!(
            read_json_body(b"{\"usuario\": "),
            Err(ApiError::InvalidJson)
        ));
        assert!(matches!(read_json_body(b"no-json"), Err(ApiError::InvalidJson)));
    }

    #[test]
    fn valid_body_parses() {
        let value = read_json_body(br#"{"usuario": "ana"}"#).unwrap();
        assert_eq!(value["usuario"], json!("ana"));
    }

    #[test]
    fn normalize_text_trims_and_defaults_to_empty() {
        let input = json!({ "usuario": "  ana  ", "vacio": "   ", "nulo": null });
        assert_eq!(normalize_text(input.get("usuario")), "ana");
        assert_eq!(normalize_text(input.get("vacio")), "");
        assert_eq!(normalize_text(input.get("nulo")), "");
        assert_eq!(normalize_text(input.get("ausente")), "");
        assert_eq!(normalize_text(Some(&json!(42))), "");
    }

    #[test]
    fn positive_id_rejects_everything_non_positive() {
        assert_eq!(positive_id(Some("7")), 7);
        assert_eq!(positive_id(Some(" 12 ")), 12);
        assert_eq!(positive_id(Some("0")), 0);
        assert_eq!(positive_id(Some("-5")), -5);
        assert_eq!(positive_id(Some("abc")), 0);
        assert_eq!(positive_id(None), 0);
    }
}
