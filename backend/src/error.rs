use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::envelope;

/// Terminal request failures.
///
/// Handlers return `Result<HttpResponse, ApiError>`; whichever side comes
/// back is the whole response, so no code can run after a failure is
/// signalled. Every variant renders the uniform `{status:"error", message}`
/// envelope with a fixed user-facing message — internal detail (SQL, io
/// errors) only ever reaches the server log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Método no permitido")]
    MethodNotAllowed,
    /// Missing or invalid required fields. Carries the endpoint's message.
    #[error("{0}")]
    Validation(String),
    #[error("JSON inválido")]
    InvalidJson,
    /// Unknown user and wrong password collapse into this one variant so the
    /// response never reveals which of the two it was.
    #[error("Credenciales inválidas")]
    InvalidCredentials,
    #[error("{0}")]
    NotFound(String),
    #[error("Error al conectar con la base de datos")]
    Database,
    #[error("Error al preparar la consulta")]
    Query,
}

impl From<rusqlite::Error> for ApiError {
    fn from(err: rusqlite::Error) -> Self {
        log::error!("query failed: {err}");
        ApiError::Query
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Validation(_) | ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database | ApiError::Query => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        envelope::error(&self.to_string(), self.status_code())
    }
}
