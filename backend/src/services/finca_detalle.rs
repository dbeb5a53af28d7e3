//! # Finca Detail Service
//!
//! Handles `GET /api/finca_detalle`: one finca plus all of its cultivos.
//!
//! Ownership is part of the lookup itself — the finca row is fetched by
//! finca id *and* owner id in the same query, so a finca owned by another
//! user is indistinguishable from one that does not exist: both answer 404
//! with the same envelope.

use actix_web::{web, HttpResponse};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Deserialize;
use serde_json::json;

use agrotrack_common::model::coordenadas::Coordenadas;
use agrotrack_common::model::cultivo::Cultivo;
use agrotrack_common::model::finca::FincaDetalle;

use crate::config::Config;
use crate::error::ApiError;
use crate::input::positive_id;
use crate::{db, envelope};

#[derive(Deserialize)]
pub struct FincaDetalleQuery {
    finca_id: Option<String>,
    usuario_id: Option<String>,
}

pub async fn process(
    query: web::Query<FincaDetalleQuery>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ApiError> {
    let finca_id = positive_id(query.finca_id.as_deref());
    let usuario_id = positive_id(query.usuario_id.as_deref());
    if finca_id <= 0 || usuario_id <= 0 {
        return Err(ApiError::Validation(
            "finca_id y usuario_id son obligatorios".to_string(),
        ));
    }

    let conn = db::open_connection(&config)?;
    let finca = fetch_finca(&conn, finca_id, usuario_id)?
        .ok_or_else(|| ApiError::NotFound("Finca no encontrada".to_string()))?;
    let cultivos = list_cultivos(&conn, finca_id)?;

    Ok(envelope::ok(json!({ "finca": finca, "cultivos": cultivos })))
}

fn fetch_finca(
    conn: &Connection,
    finca_id: i64,
    usuario_id: i64,
) -> Result<Option<FincaDetalle>, ApiError> {
    let mut stmt = conn.prepare(
        "SELECT FIN_ID, FIN_NOMBRE, FIN_UBICACION, FIN_SUPERFICIE, FIN_TIPO_SUELO,
                FIN_COORD_POLIGONO, FIN_SISTEMA_RIEGO, FIN_ESTADO, FIN_FECHA_REGISTRO
         FROM finca
         WHERE FIN_ID = ?1 AND FIN_USU_ID = ?2
         LIMIT 1",
    )?;

    stmt.query_row(params![finca_id, usuario_id], |row| {
        Ok(FincaDetalle {
            id: row.get(0)?,
            nombre: row.get(1)?,
            ubicacion: row.get(2)?,
            superficie: row.get(3)?,
            tipo_suelo: row.get(4)?,
            coordenadas: row
                .get::<_, Option<String>>(5)?
                .map(|raw| Coordenadas::parse(&raw)),
            sistema_riego: row.get(6)?,
            estado: row.get::<_, String>(7)?.to_uppercase(),
            fecha_registro: row.get(8)?,
        })
    })
    .optional()
    .map_err(ApiError::from)
}

fn list_cultivos(conn: &Connection, finca_id: i64) -> Result<Vec<Cultivo>, ApiError> {
    let mut stmt = conn.prepare(
        "SELECT CUL_ID, CUL_NOMBRE, CUL_VARIEDAD, CUL_FECHA_SIEMBRA, CUL_FECHA_COSECHA,
                CUL_ESTADO, CUL_PRODUCCION_KG, CUL_REND_ESTIMADO, CUL_REND_REAL
         FROM cultivo
         WHERE CUL_FIN_ID = ?1
         ORDER BY CUL_FECHA_SIEMBRA DESC",
    )?;

    let filas = stmt.query_map(params![finca_id], |row| {
        Ok(Cultivo {
            id: row.get(0)?,
            nombre: row.get(1)?,
            variedad: row.get(2)?,
            fecha_siembra: row.get(3)?,
            fecha_cosecha: row.get(4)?,
            estado: row.get::<_, String>(5)?.to_uppercase(),
            produccion_kg: row.get(6)?,
            rendimiento_estimado: row.get(7)?,
            rendimiento_real: row.get(8)?,
        })
    })?;

    filas
        .collect::<Result<Vec<_>, _>>()
        .map_err(ApiError::from)
}
