//! Host metrics probe.
//!
//! This module handles:
//! - Raw host samples and the derived metrics reported by `/health`
//! - The real OS-backed probe
//! - A mock probe for tests and fault injection

pub mod host;
pub mod mock;
pub mod types;

use std::sync::Arc;

use crate::error::ProbeError;
use crate::metrics;

pub use host::HostProbe;
pub use mock::MockProbe;
pub use types::{HostSample, SystemMetrics};

/// Source of host resource samples.
///
/// `sample` may block (the host probe sleeps for its CPU sample interval),
/// so callers on the async runtime should go through [`collect`].
pub trait MetricsProbe: Send + Sync + std::fmt::Debug {
    /// Take one sample of CPU, memory and root filesystem usage.
    fn sample(&self) -> Result<HostSample, ProbeError>;
}

/// Sample `probe` on the blocking pool and derive the reported metrics.
pub async fn collect(probe: Arc<dyn MetricsProbe>) -> Result<SystemMetrics, ProbeError> {
    let _timer = metrics::timer_health_sample();

    let sample = tokio::task::spawn_blocking(move || probe.sample())
        .await
        .map_err(|e| ProbeError::SamplerFailed(e.to_string()))??;

    sample.into_metrics()
}
