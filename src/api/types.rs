//! JSON response records.

use chrono::{Local, SecondsFormat};
use serde::Serialize;
use strum::Display;

use crate::probe::SystemMetrics;

/// Application name reported by `/`.
pub const APP_NAME: &str = "Python CI/CD Demo";
/// Application version reported by `/`.
pub const APP_VERSION: &str = "1.0.0";
/// Paths served by the API, as listed by `/health`.
pub const ENDPOINTS: [&str; 3] = ["/", "/health", "/status"];

/// Current local time as an RFC 3339 timestamp.
pub fn now_timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Response of `/`.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    /// Application name.
    pub application: &'static str,
    /// Application version.
    pub version: &'static str,
    /// Always "operational".
    pub status: &'static str,
    /// Server time when the response was built.
    pub server_time: String,
    /// Local host name.
    pub host: String,
    /// Runtime the server was built for.
    pub runtime: String,
    /// Deployment environment name.
    pub environment: String,
}

/// Health verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HealthStatus {
    /// Metrics were collected.
    Healthy,
    /// Metric collection failed.
    Unhealthy,
}

/// Static application details in a healthy report.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationInfo {
    /// Always "running".
    pub uptime: &'static str,
    /// Paths served by the API.
    pub endpoints_available: [&'static str; 3],
}

impl Default for ApplicationInfo {
    fn default() -> Self {
        Self {
            uptime: "running",
            endpoints_available: ENDPOINTS,
        }
    }
}

/// Response of `/health`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum HealthReport {
    /// Metrics were collected.
    Healthy {
        status: HealthStatus,
        timestamp: String,
        system_metrics: SystemMetrics,
        application: ApplicationInfo,
    },
    /// Metric collection failed with `error`.
    Unhealthy {
        status: HealthStatus,
        error: String,
        timestamp: String,
    },
}

impl HealthReport {
    /// Report carrying collected metrics.
    pub fn healthy(system_metrics: SystemMetrics) -> Self {
        Self::Healthy {
            status: HealthStatus::Healthy,
            timestamp: now_timestamp(),
            system_metrics,
            application: ApplicationInfo::default(),
        }
    }

    /// Report carrying the reason collection failed.
    pub fn unhealthy(error: impl ToString) -> Self {
        Self::Unhealthy {
            status: HealthStatus::Unhealthy,
            error: error.to_string(),
            timestamp: now_timestamp(),
        }
    }
}

/// Response of `/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// Always "ok".
    pub status: &'static str,
    /// Always 200.
    pub code: u16,
    /// Fixed message.
    pub message: &'static str,
}

impl StatusReport {
    /// The only status report the service produces.
    pub const OK: Self = Self {
        status: "ok",
        code: 200,
        message: "Service is running normally",
    };
}
