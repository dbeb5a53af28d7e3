//! # Login Service
//!
//! Handles `POST /api/login`: checks a username-or-email plus password pair
//! against the user table and returns the matching user's public profile.
//!
//! The body is read through the shared input reader, so an empty body counts
//! as an empty object and malformed JSON fails with the fixed 400 envelope
//! before any database work. An unknown user and a wrong password produce
//! byte-identical 401 responses; nothing in the reply says which check
//! failed, and only active accounts can match at all.

use actix_web::{web, HttpResponse};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::json;

use agrotrack_common::model::usuario::Usuario;

use crate::config::Config;
use crate::error::ApiError;
use crate::input::{normalize_text, read_json_body};
use crate::{db, envelope, security};

pub async fn process(
    body: web::Bytes,
    config: web::Data<Config>,
) -> Result<HttpResponse, ApiError> {
    let input = read_json_body(&body)?;
    let usuario = normalize_text(input.get("usuario"));
    // The password is taken verbatim: surrounding whitespace is significant.
    let password = input
        .get("password")
        .and_then(|value| value.as_str())
        .unwrap_or("");

    if usuario.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "Usuario y contraseña son obligatorios".to_string(),
        ));
    }

    let conn = db::open_connection(&config)?;
    let datos = authenticate(&conn, &usuario, password, config.allow_plaintext_passwords)?;

    Ok(envelope::ok(json!({ "usuario": datos })))
}

/// Looks up the active user by username or email and verifies the password.
/// Any mismatch collapses into `InvalidCredentials`.
fn authenticate(
    conn: &Connection,
    usuario: &str,
    password: &str,
    allow_plaintext: bool,
) -> Result<Usuario, ApiError> {
    let mut stmt = conn.prepare(
        "SELECT USU_ID, USU_NOMBRE, USU_APELLIDOS, USU_EMAIL, USU_USERNAME, USU_PASSWORD, USU_ROL
         FROM usuario
         WHERE (USU_USERNAME = ?1 OR USU_EMAIL = ?1) AND USU_ACTIVO = 1
         LIMIT 1",
    )?;

    let fila = stmt
        .query_row(params![usuario], |row| {
            Ok((
                Usuario {
                    id: row.get(0)?,
                    nombre: row.get(1)?,
                    apellidos: row.get(2)?,
                    email: row.get(3)?,
                    username: row.get(4)?,
                    rol: row.get::<_, String>(6)?.to_uppercase(),
                },
                row.get::<_, String>(5)?,
            ))
        })
        .optional()?;

    let (datos, credencial) = fila.ok_or(ApiError::InvalidCredentials)?;
    if !security::verify_password(password, &credencial, allow_plaintext) {
        return Err(ApiError::InvalidCredentials);
    }

    Ok(datos)
}
