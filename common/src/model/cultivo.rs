use serde::{Deserialize, Serialize};

/// A crop record scoped to a single finca.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cultivo {
    pub id: i64,
    pub nombre: String,
    pub variedad: Option<String>,
    pub fecha_siembra: Option<String>,
    pub fecha_cosecha: Option<String>,
    /// Always upper-cased on output.
    pub estado: String,
    pub produccion_kg: Option<f64>,
    pub rendimiento_estimado: Option<f64>,
    pub rendimiento_real: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_yields_serialize_as_null() {
        let cultivo = Cultivo {
            id: 9,
            nombre: "Trigo".into(),
            variedad: None,
            fecha_siembra: Some("2025-10-02".into()),
            fecha_cosecha: None,
            estado: "SEMBRADO".into(),
            produccion_kg: None,
            rendimiento_estimado: Some(4.5),
            rendimiento_real: None,
        };
        let value = serde_json::to_value(&cultivo).unwrap();
        assert_eq!(value["produccion_kg"], json!(null));
        assert_eq!(value["rendimiento_estimado"], json!(4.5));
        assert_eq!(value["rendimiento_real"], json!(null));
        assert_eq!(value["fecha_cosecha"], json!(null));
    }
}
