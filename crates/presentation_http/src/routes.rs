//! Route definitions

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        // Forecast page
        .route("/", get(handlers::page::forecast_page))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Icon and mascot assets
        .nest_service("/static", static_files)
        // Attach state
        .with_state(state)
}
