//! Minimal JSON status server used as a CI/CD pipeline target.
//!
//! Serves three read-only endpoints:
//!
//! ```text
//! GET /         application name, version, host, runtime, environment
//! GET /health   live CPU, memory and root disk usage (500 if sampling fails)
//! GET /status   fixed "ok" body
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`probe`]: Host metrics sampling
//! - [`api`]: HTTP handlers, response types and router
//! - [`server`]: Server binding and lifecycle
//! - [`metrics`]: Request and sampling metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod probe;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
pub use server::Server;
