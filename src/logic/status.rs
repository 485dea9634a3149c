//! Host Metrics - live numbers for the overview dashboard

use serde::{Deserialize, Serialize};
use sysinfo::System;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostMetrics {
    pub cpu_usage: f32,
    pub memory_percent: f32,
    pub memory_used_mb: f64,
    pub memory_total_mb: f64,
    pub process_count: usize,
}

/// One point-in-time snapshot of the host. Cheap enough to take per
/// request; no background collector needed for a single-user dashboard.
pub fn sample_host() -> HostMetrics {
    let mut sys = System::new_all();
    sys.refresh_all();

    let cpus = sys.cpus();
    let cpu_usage = if !cpus.is_empty() {
        cpus.iter().map(|c| c.cpu_usage()).sum::<f32>() / cpus.len() as f32
    } else {
        0.0
    };

    let memory_total_mb = sys.total_memory() as f64 / 1024.0 / 1024.0;
    let memory_used_mb = sys.used_memory() as f64 / 1024.0 / 1024.0;
    let memory_percent = if memory_total_mb > 0.0 {
        ((memory_used_mb / memory_total_mb) * 100.0) as f32
    } else {
        0.0
    };

    HostMetrics {
        cpu_usage,
        memory_percent,
        memory_used_mb,
        memory_total_mb,
        process_count: sys.processes().len(),
    }
}
