//! Mock probe for unit testing.
//!
//! Returns a fixed sample, or a configured error to exercise the
//! unhealthy path of `/health` without touching the host.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::ProbeError;

use super::types::HostSample;
use super::MetricsProbe;

const GB: u64 = 1024 * 1024 * 1024;

/// Mock probe for testing.
#[derive(Debug, Clone)]
pub struct MockProbe {
    /// What each call to `sample` returns.
    outcome: Result<HostSample, ProbeError>,
    /// Number of samples taken.
    calls: Arc<AtomicU64>,
}

impl MockProbe {
    /// Mock returning [`MockProbe::default_sample`].
    pub fn new() -> Self {
        Self::with_sample(Self::default_sample())
    }

    /// Mock returning `sample` on every call.
    pub fn with_sample(sample: HostSample) -> Self {
        Self {
            outcome: Ok(sample),
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Mock failing every call with `error`.
    pub fn failing(error: ProbeError) -> Self {
        Self {
            outcome: Err(error),
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    /// 12.5% CPU, 4 of 16 GB memory available, 40 of 100 GB disk free.
    pub fn default_sample() -> HostSample {
        HostSample {
            cpu_usage_percent: 12.5,
            memory_total_bytes: 16 * GB,
            memory_available_bytes: 4 * GB,
            disk_total_bytes: 100 * GB,
            disk_available_bytes: 40 * GB,
        }
    }

    /// Number of times `sample` was called.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProbe for MockProbe {
    fn sample(&self) -> Result<HostSample, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}
