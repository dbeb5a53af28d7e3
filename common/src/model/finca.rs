use serde::{Deserialize, Serialize};

use crate::model::coordenadas::Coordenadas;

/// Summary shape used when listing a user's fincas.
///
/// Nullable columns stay `Option` so an absent value serializes as JSON
/// `null`, never as `0` or an empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finca {
    pub id: i64,
    pub nombre: String,
    pub ubicacion: Option<String>,
    pub superficie: Option<f64>,
    pub tipo_suelo: Option<String>,
    /// Always upper-cased on output.
    pub estado: String,
    pub coordenadas: Option<Coordenadas>,
}

/// Full shape returned by the finca detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FincaDetalle {
    pub id: i64,
    pub nombre: String,
    pub ubicacion: Option<String>,
    pub superficie: Option<f64>,
    pub tipo_suelo: Option<String>,
    pub estado: String,
    pub coordenadas: Option<Coordenadas>,
    pub sistema_riego: Option<String>,
    pub fecha_registro: Option<String>,
}
