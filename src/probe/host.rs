//! OS-backed probe reading live host metrics through `sysinfo`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, RefreshKind, System};
use tracing::debug;

use crate::error::ProbeError;

use super::types::HostSample;
use super::MetricsProbe;

/// Shortest interval over which CPU utilization is measured.
pub const CPU_SAMPLE_INTERVAL: Duration = Duration::from_millis(100);

/// Interval the host probe actually sleeps between CPU refreshes.
///
/// sysinfo ignores a CPU refresh that comes sooner than
/// [`sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`] after the previous one (200 ms on
/// Linux) and keeps reporting the since-boot average, so the window is
/// widened to that minimum where the platform requires it.
pub fn cpu_sample_interval() -> Duration {
    CPU_SAMPLE_INTERVAL.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL)
}

/// Probe for the machine the server runs on.
#[derive(Debug, Clone)]
pub struct HostProbe {
    cpu_interval: Duration,
    disk_mount: PathBuf,
}

impl HostProbe {
    /// Probe sampling CPU over [`cpu_sample_interval`] and measuring `/`.
    pub fn new() -> Self {
        Self {
            cpu_interval: cpu_sample_interval(),
            disk_mount: PathBuf::from("/"),
        }
    }

    /// Measure the filesystem mounted at `mount` instead of `/`.
    pub fn with_disk_mount(mut self, mount: impl Into<PathBuf>) -> Self {
        self.disk_mount = mount.into();
        self
    }

    /// Time between the two CPU refreshes of a sample.
    pub fn cpu_interval(&self) -> Duration {
        self.cpu_interval
    }

    /// Mount point whose filesystem is measured.
    pub fn disk_mount(&self) -> &Path {
        &self.disk_mount
    }

    /// Local host name as reported by the OS.
    pub fn host_name() -> Option<String> {
        System::host_name()
    }

    /// Rust toolchain version the binary was built for.
    pub fn runtime_version() -> String {
        format!("rust {}", env!("CARGO_PKG_RUST_VERSION"))
    }
}

impl Default for HostProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProbe for HostProbe {
    fn sample(&self) -> Result<HostSample, ProbeError> {
        let mut sys = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
                .with_memory(MemoryRefreshKind::nothing().with_ram()),
        );

        if sys.cpus().is_empty() {
            return Err(ProbeError::CpuUnavailable);
        }

        // Usage is the delta between two refreshes; the sleep must exceed
        // sysinfo's minimum or the second refresh is skipped.
        std::thread::sleep(self.cpu_interval);
        sys.refresh_cpu_usage();
        let cpu_usage_percent = sys.global_cpu_usage();

        let disks = Disks::new_with_refreshed_list();
        let disk = disks
            .list()
            .iter()
            .find(|d| d.mount_point() == self.disk_mount.as_path())
            .ok_or_else(|| ProbeError::DiskNotFound(self.disk_mount.clone()))?;

        let sample = HostSample {
            cpu_usage_percent,
            memory_total_bytes: sys.total_memory(),
            memory_available_bytes: sys.available_memory(),
            disk_total_bytes: disk.total_space(),
            disk_available_bytes: disk.available_space(),
        };

        debug!(?sample, "Sampled host metrics");
        Ok(sample)
    }
}
