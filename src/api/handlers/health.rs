//! Health check handlers.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::api::state::AppState;
use crate::error::{AppError, Result};

/// Liveness probe - always returns 200 if the service is running.
pub async fn health() -> Json<Value> {
    Json(json!({
        "code": 0,
        "message": "success",
        "data": {
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION")
        }
    }))
}

/// Readiness probe. The engine has no backing store, so it is ready as soon
/// as it serves.
pub async fn ready() -> Json<Value> {
    Json(json!({
        "code": 0,
        "message": "success",
        "data": {
            "ready": true,
            "components": {
                "engine": true
            }
        }
    }))
}

/// Prometheus metrics endpoint.
pub async fn metrics(State(state): State<AppState>) -> Result<String> {
    if !state.config.observability.metrics_enabled {
        return Err(AppError::NotFound("metrics are disabled".to_string()));
    }

    let mut output = String::new();
    output.push_str("# HELP dande_up Whether the service is up\n");
    output.push_str("# TYPE dande_up gauge\n");
    output.push_str("dande_up 1\n");

    if let Some(handle) = &state.metrics {
        output.push_str(&handle.render());
    }

    Ok(output)
}
