use actix_web::{web, HttpResponse};
use rusqlite::{params, Connection};
use serde::Deserialize;
use serde_json::json;

use agrotrack_common::model::coordenadas::Coordenadas;
use agrotrack_common::model::finca::Finca;

use crate::config::Config;
use crate::error::ApiError;
use crate::input::positive_id;
use crate::{db, envelope};

#[derive(Deserialize)]
pub struct FincasQuery {
    usuario_id: Option<String>,
}

/// `GET /api/fincas`: the fincas owned by `usuario_id`, ordered by name.
/// An empty list is a success, not an error.
pub async fn process(
    query: web::Query<FincasQuery>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ApiError> {
    let usuario_id = positive_id(query.usuario_id.as_deref());
    if usuario_id <= 0 {
        return Err(ApiError::Validation("usuario_id es obligatorio".to_string()));
    }

    let conn = db::open_connection(&config)?;
    let fincas = list_fincas(&conn, usuario_id)?;

    Ok(envelope::ok(json!({ "fincas": fincas })))
}

fn list_fincas(conn: &Connection, usuario_id: i64) -> Result<Vec<Finca>, ApiError> {
    let mut stmt = conn.prepare(
        "SELECT FIN_ID, FIN_NOMBRE, FIN_UBICACION, FIN_SUPERFICIE, FIN_TIPO_SUELO,
                FIN_ESTADO, FIN_COORD_POLIGONO
         FROM finca
         WHERE FIN_USU_ID = ?1
         ORDER BY FIN_NOMBRE ASC",
    )?;

    let filas = stmt.query_map(params![usuario_id], |row| {
        Ok(Finca {
            id: row.get(0)?,
            nombre: row.get(1)?,
            ubicacion: row.get(2)?,
            superficie: row.get(3)?,
            tipo_suelo: row.get(4)?,
            estado: row.get::<_, String>(5)?.to_uppercase(),
            coordenadas: row
                .get::<_, Option<String>>(6)?
                .map(|raw| Coordenadas::parse(&raw)),
        })
    })?;

    filas
        .collect::<Result<Vec<_>, _>>()
        .map_err(ApiError::from)
}
