//! HTTP API module for the info, health, and status endpoints.

pub mod handlers;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use types::{HealthReport, HealthStatus, StatusReport, SystemInfo};
