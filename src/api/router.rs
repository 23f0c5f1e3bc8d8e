use std::path::Path;

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::logging_middleware;
use super::rio;
use super::state::AppState;
use crate::config::UiConfig;

/// Routes below /api
fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(rio::create_rio_router())
}

/// Create the JSON API router
pub fn create_router(state: AppState) -> Router {
    with_layers(Router::new().nest("/api", api_router()).with_state(state))
}

/// Create the router serving both the JSON API and the presentation page
pub fn create_router_with_ui(state: AppState, ui: &UiConfig) -> Router {
    let static_dir = Path::new(&ui.static_dir);

    let router = Router::new()
        .nest("/api", api_router())
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir.join("static")))
        .with_state(state);

    with_layers(router)
}

fn with_layers(router: Router) -> Router {
    router
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
