//! Unified error types for the status server.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Unified error type for the status server.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Host metrics collection errors.
///
/// The display text is what `/health` reports in its `error` field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbeError {
    /// The OS reported no CPUs to sample.
    #[error("no CPU usage data available")]
    CpuUnavailable,

    /// The OS reported zero total memory.
    #[error("virtual memory statistics unavailable")]
    MemoryUnavailable,

    /// No mounted filesystem matches the requested path.
    #[error("no filesystem mounted at {}", .0.display())]
    DiskNotFound(PathBuf),

    /// The sampling task panicked or was cancelled.
    #[error("metrics sampler failed: {0}")]
    SamplerFailed(String),
}

/// HTTP-facing error that converts to a JSON response.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unhandled failure while building a response.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Result alias for handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
