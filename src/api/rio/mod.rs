//! Registry endpoints under /api

pub mod erkenningen;
pub mod instellingen;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create the registry router
pub fn create_rio_router() -> Router<AppState> {
    Router::new()
        .route("/erkenningen", get(erkenningen::search_erkenningen))
        .route("/erkenningen/{erkenning_id}", get(erkenningen::get_erkenning))
        .route(
            "/erkenningen/{erkenning_id}/organisatorische-eenheden",
            get(erkenningen::list_organisatorische_eenheden),
        )
        .route(
            "/instellingen/{code}/opleidingen",
            get(instellingen::list_opleidingen),
        )
        .route(
            "/instellingen/{code}/aangeboden-opleidingen",
            get(instellingen::list_aangeboden_opleidingen_legacy),
        )
}
