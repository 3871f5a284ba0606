//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::{instrument, warn};

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::probe::{self, HostProbe, MetricsProbe};

use super::types::{now_timestamp, HealthReport, HealthStatus, StatusReport, SystemInfo, APP_NAME, APP_VERSION};

/// Application state shared with handlers.
///
/// Holds configuration only; nothing in it is mutated after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Deployment environment name reported by `/`.
    pub environment: Arc<str>,
    /// Source of host metrics for `/health`.
    pub probe: Arc<dyn MetricsProbe>,
}

impl AppState {
    /// Create new app state with a custom probe.
    pub fn with_probe(environment: impl Into<Arc<str>>, probe: Arc<dyn MetricsProbe>) -> Self {
        Self {
            environment: environment.into(),
            probe,
        }
    }
}

/// System information handler.
pub async fn index(State(state): State<AppState>) -> ApiResult<Json<SystemInfo>> {
    metrics::inc_http_requests("/");

    let host = HostProbe::host_name()
        .ok_or_else(|| ApiError::Internal("unable to resolve host name".to_string()))?;

    Ok(Json(SystemInfo {
        application: APP_NAME,
        version: APP_VERSION,
        status: "operational",
        server_time: now_timestamp(),
        host,
        runtime: HostProbe::runtime_version(),
        environment: state.environment.to_string(),
    }))
}

/// Health check handler - returns 200 with live metrics, 500 if sampling fails.
#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    metrics::inc_http_requests("/health");

    match probe::collect(Arc::clone(&state.probe)).await {
        Ok(system_metrics) => (StatusCode::OK, Json(HealthReport::healthy(system_metrics))),
        Err(e) => {
            warn!(status = %HealthStatus::Unhealthy, "Health check failed: {}", e);
            metrics::inc_health_check_failures();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthReport::unhealthy(e)),
            )
        }
    }
}

/// Status handler - always 200 with a fixed body.
pub async fn status() -> impl IntoResponse {
    metrics::inc_http_requests("/status");
    Json(StatusReport::OK)
}
