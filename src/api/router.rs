//! Router setup and configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{dacbiet, dande, health};
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Health and metrics routes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/metrics", get(health::metrics));

    // Dan de routes
    let dande_routes = Router::new()
        .route("/generate", post(dande::generate))
        .route("/special-sets", get(dande::special_sets))
        .route("/categories", get(dande::categories))
        .route("/special/quick", post(dacbiet::quick))
        .route("/special/head-tail", post(dacbiet::head_tail))
        .route("/special/touch", post(dacbiet::touch))
        .route("/special/category", post(dacbiet::category));

    let router = Router::new()
        .merge(health_routes)
        .nest("/v1/dande", dande_routes)
        .layer(TraceLayer::new_for_http());

    let router = if state.config.server.cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}
