use serde::{Deserialize, Serialize};

/// Public view of an authenticated user. The stored password hash never
/// travels in this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub apellidos: String,
    pub email: String,
    pub username: String,
    /// Always upper-cased on output, regardless of how the row stores it.
    pub rol: String,
}
