//! HTTP endpoints of the tracking API.
//!
//! Routes live under `/api`. Every resource answers `OPTIONS` preflight with
//! 204 before any handler logic and turns any other unsupported method into
//! the 405 envelope. The endpoints themselves:
//! - `POST /api/login`: credential check, returns the authenticated user.
//! - `GET /api/fincas`: lists the fincas owned by `usuario_id`.
//! - `GET /api/finca_detalle`: one finca plus its cultivos, only when it
//!   belongs to the requesting user.

mod finca_detalle;
mod fincas;
mod login;

use actix_web::http::Method;
use actix_web::web::{get, post, resource, route};
use actix_web::{web, HttpResponse, Scope};

use crate::envelope;
use crate::error::ApiError;

const API_PATH: &str = "/api";

async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}

/// Configures and returns the Actix scope for the API routes.
pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .service(
            resource("/login")
                .route(route().method(Method::OPTIONS).to(envelope::preflight))
                .route(post().to(login::process))
                .default_service(route().to(method_not_allowed)),
        )
        .service(
            resource("/fincas")
                .route(route().method(Method::OPTIONS).to(envelope::preflight))
                .route(get().to(fincas::process))
                .default_service(route().to(method_not_allowed)),
        )
        .service(
            resource("/finca_detalle")
                .route(route().method(Method::OPTIONS).to(envelope::preflight))
                .route(get().to(finca_detalle::process))
                .default_service(route().to(method_not_allowed)),
        )
}
