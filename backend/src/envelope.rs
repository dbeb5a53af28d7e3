//! Uniform JSON envelopes for every response the API emits.
//!
//! Success bodies are `{"status":"ok","data":{...}}`, failures are
//! `{"status":"error","message":"..."}`. Each response carries the JSON
//! content type with an explicit UTF-8 charset plus permissive CORS headers,
//! and serde_json leaves non-ASCII text and forward slashes unescaped.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, HttpResponseBuilder};
use serde::Serialize;
use serde_json::{json, Value};

fn apply_cors(builder: &mut HttpResponseBuilder) {
    builder
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .insert_header(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type, Authorization"));
}

fn respond(status: StatusCode, payload: &impl Serialize) -> HttpResponse {
    let mut builder = HttpResponseBuilder::new(status);
    apply_cors(&mut builder);
    match serde_json::to_string(payload) {
        Ok(body) => builder
            .content_type("application/json; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("response serialization failed: {err}");
            builder.status(StatusCode::INTERNAL_SERVER_ERROR).finish()
        }
    }
}

/// Builds the HTTP 200 success envelope around `data`.
pub fn ok(data: Value) -> HttpResponse {
    respond(StatusCode::OK, &json!({ "status": "ok", "data": data }))
}

/// Builds the error envelope with the given status.
pub fn error(message: &str, status: StatusCode) -> HttpResponse {
    respond(status, &json!({ "status": "error", "message": message }))
}

/// Answers CORS preflight requests: HTTP 204, no body, before any handler
/// logic runs.
pub async fn preflight() -> HttpResponse {
    let mut builder = HttpResponse::NoContent();
    apply_cors(&mut builder);
    builder.finish()
}
