//! Host sample and derived metric types.

use serde::Serialize;

use crate::error::ProbeError;
use crate::utils::{bytes_to_gb, percent, round_to};

/// One raw reading of host resources, in OS units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostSample {
    /// Global CPU usage over the sample interval, in percent.
    pub cpu_usage_percent: f32,
    /// Total physical memory in bytes.
    pub memory_total_bytes: u64,
    /// Memory available to new processes in bytes.
    pub memory_available_bytes: u64,
    /// Root filesystem size in bytes.
    pub disk_total_bytes: u64,
    /// Root filesystem space available to unprivileged users in bytes.
    ///
    /// Blocks reserved for root are not included, so they count as used.
    pub disk_available_bytes: u64,
}

/// Resource metrics as reported under `system_metrics` by `/health`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemMetrics {
    /// CPU utilization, 0–100.
    pub cpu_usage_percent: f64,
    /// Available memory in GB, 2 decimals.
    pub memory_available_gb: f64,
    /// Used memory, 0–100.
    pub memory_used_percent: f64,
    /// Free space on the root filesystem in GB, 2 decimals.
    pub disk_free_gb: f64,
    /// Used space on the root filesystem, 0–100.
    pub disk_used_percent: f64,
}

impl HostSample {
    /// Derive the reported metrics.
    ///
    /// Fails when the sample carries no memory total, since no usage
    /// percentage can be computed from it.
    pub fn into_metrics(self) -> Result<SystemMetrics, ProbeError> {
        if self.memory_total_bytes == 0 {
            return Err(ProbeError::MemoryUnavailable);
        }

        let memory_used = self
            .memory_total_bytes
            .saturating_sub(self.memory_available_bytes);
        let disk_used = self
            .disk_total_bytes
            .saturating_sub(self.disk_available_bytes);

        let cpu = f64::from(self.cpu_usage_percent);
        let cpu = if cpu.is_finite() { cpu.clamp(0.0, 100.0) } else { 0.0 };

        Ok(SystemMetrics {
            cpu_usage_percent: round_to(cpu, 1),
            memory_available_gb: bytes_to_gb(self.memory_available_bytes),
            memory_used_percent: percent(memory_used, self.memory_total_bytes),
            disk_free_gb: bytes_to_gb(self.disk_available_bytes),
            disk_used_percent: percent(disk_used, self.disk_total_bytes),
        })
    }
}
