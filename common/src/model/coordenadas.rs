use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Contents of a finca's polygon column.
///
/// The column stores free text. When that text is valid, non-empty JSON it is
/// decoded and served as a structured value; anything else passes through as
/// the raw string, so a row with a malformed polygon never breaks a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordenadas {
    Poligono(Value),
    Texto(String),
}

impl Coordenadas {
    /// Decodes the stored polygon text, falling back to the raw string when
    /// it is not JSON or decodes to an empty or zero-like value.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) if !is_empty_like(&value) => Coordenadas::Poligono(value),
            _ => Coordenadas::Texto(raw.to_string()),
        }
    }
}

fn is_empty_like(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty() || text == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_json_decodes_to_structure() {
        let parsed = Coordenadas::parse(r#"[[40.1, -3.7], [40.2, -3.6]]"#);
        assert_eq!(
            parsed,
            Coordenadas::Poligono(json!([[40.1, -3.7], [40.2, -3.6]]))
        );
    }

    #[test]
    fn non_json_text_passes_through_unchanged() {
        let parsed = Coordenadas::parse("parcela junto al río");
        assert_eq!(parsed, Coordenadas::Texto("parcela junto al río".into()));
    }

    #[test]
    fn empty_decodes_fall_back_to_raw_text() {
        for raw in ["null", "[]", "{}", "0", "false", "\"\""] {
            assert_eq!(Coordenadas::parse(raw), Coordenadas::Texto(raw.into()));
        }
    }

    #[test]
    fn serializes_without_a_wrapper_tag() {
        let structured = serde_json::to_value(Coordenadas::parse("[1, 2]")).unwrap();
        assert_eq!(structured, json!([1, 2]));

        let texto = serde_json::to_value(Coordenadas::parse("sin datos")).unwrap();
        assert_eq!(texto, json!("sin datos"));
    }
}
