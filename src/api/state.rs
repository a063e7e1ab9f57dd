//! Application state for Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::service::DanDeService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Dan de generation service.
    pub dande_service: Arc<DanDeService>,
    /// Prometheus handle, if a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: Arc<AppConfig>, metrics: Option<PrometheusHandle>) -> Self {
        let dande_service = Arc::new(DanDeService::new(&config.generation));

        Self {
            config,
            dande_service,
            metrics,
        }
    }
}
