//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Provider pass-through
        .route("/api/weather", get(handlers::proxy::weather_proxy))
        // Dashboard API (v1)
        .route("/v1/dashboard", get(handlers::dashboard::get_dashboard))
        .route("/v1/cities", get(handlers::dashboard::search_cities))
        // Attach state
        .with_state(state)
        .layer(RequestIdLayer::new())
}
