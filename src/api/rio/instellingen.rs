//! Instellingen (organisatorische eenheid) endpoint handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use super::erkenningen::{parse_datum, parse_pagination};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Query, ResultsResponse};
use crate::domain::{LegacyAangebodenOpleiding, OpleidingenOverzicht};

#[derive(Debug, Default, Deserialize)]
pub struct OpleidingenQuery {
    pub datum_geldig_op: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LegacyOpleidingenQuery {
    pub datum: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// GET /api/instellingen/{code}/opleidingen
pub async fn list_opleidingen(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<OpleidingenQuery>,
) -> Result<Json<OpleidingenOverzicht>, ApiError> {
    let peildatum = parse_datum(query.datum_geldig_op.as_deref(), "datum_geldig_op")?;

    debug!(code = %code, "Listing opleidingen per instelling");

    let overzicht = state
        .registry
        .opleidingen_per_instelling(&code, peildatum)
        .await?;

    Ok(Json(overzicht))
}

/// GET /api/instellingen/{code}/aangeboden-opleidingen
///
/// Older listing kept next to `/opleidingen`; one page, with cohorts.
pub async fn list_aangeboden_opleidingen_legacy(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<LegacyOpleidingenQuery>,
) -> Result<Json<ResultsResponse<LegacyAangebodenOpleiding>>, ApiError> {
    let peildatum = parse_datum(query.datum.as_deref(), "datum")?;
    let pagination = parse_pagination(query.page, query.page_size)?;

    debug!(code = %code, page = pagination.page(), "Listing aangeboden opleidingen (legacy)");

    let results = state
        .registry
        .aangeboden_opleidingen_legacy(&code, peildatum, pagination)
        .await?;

    Ok(Json(ResultsResponse::new(results)))
}
