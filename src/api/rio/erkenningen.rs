//! Erkenningen endpoint handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Query, ResultsResponse};
use crate::domain::{ErkenningDetail, Pagination, Peildatum};

/// Query parameters for the erkenningen search
#[derive(Debug, Deserialize)]
pub struct ErkenningenQuery {
    pub plaatsnaam: String,
    pub datum: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// Optional reference date
#[derive(Debug, Default, Deserialize)]
pub struct DatumQuery {
    pub datum: Option<String>,
}

pub(crate) fn parse_datum(value: Option<&str>, param: &str) -> Result<Option<Peildatum>, ApiError> {
    Peildatum::parse_optional(value).map_err(|e| ApiError::from(e).with_param(param))
}

pub(crate) fn parse_pagination(page: Option<u32>, page_size: Option<u32>) -> Result<Pagination, ApiError> {
    Pagination::from_query(page, page_size).map_err(|e| ApiError::from(e).with_param("page_size"))
}

/// GET /api/erkenningen
pub async fn search_erkenningen(
    State(state): State<AppState>,
    Query(query): Query<ErkenningenQuery>,
) -> Result<Json<ResultsResponse<Value>>, ApiError> {
    if query.plaatsnaam.trim().is_empty() {
        return Err(ApiError::bad_request("Queryparameter 'plaatsnaam' is verplicht")
            .with_param("plaatsnaam")
            .with_code("missing_parameter"));
    }

    let peildatum = parse_datum(query.datum.as_deref(), "datum")?;
    let pagination = parse_pagination(query.page, query.page_size)?;

    debug!(plaatsnaam = %query.plaatsnaam, page = pagination.page(), "Searching erkenningen");

    let results = state
        .registry
        .search_erkenningen(&query.plaatsnaam, peildatum, pagination)
        .await?;

    Ok(Json(ResultsResponse::new(results)))
}

/// GET /api/erkenningen/{erkenning_id}
pub async fn get_erkenning(
    State(state): State<AppState>,
    Path(erkenning_id): Path<String>,
    Query(query): Query<DatumQuery>,
) -> Result<Json<ErkenningDetail>, ApiError> {
    let peildatum = parse_datum(query.datum.as_deref(), "datum")?;

    debug!(erkenning_id = %erkenning_id, "Getting erkenning detail");

    let detail = state
        .registry
        .erkenning_detail(&erkenning_id, peildatum)
        .await?;

    Ok(Json(detail))
}

/// GET /api/erkenningen/{erkenning_id}/organisatorische-eenheden
pub async fn list_organisatorische_eenheden(
    State(state): State<AppState>,
    Path(erkenning_id): Path<String>,
    Query(query): Query<DatumQuery>,
) -> Result<Json<ResultsResponse<Value>>, ApiError> {
    let peildatum = parse_datum(query.datum.as_deref(), "datum")?;

    debug!(erkenning_id = %erkenning_id, "Listing organisatorische eenheden");

    let results = state
        .registry
        .organisatorische_eenheden(&erkenning_id, peildatum)
        .await?;

    Ok(Json(ResultsResponse::new(results)))
}
