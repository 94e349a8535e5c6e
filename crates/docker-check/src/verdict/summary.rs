//! Daemon-wide summary against container count thresholds

use super::Verdict;
use crate::config::Thresholds;
use crate::daemon::DaemonInfo;

/// Thresholds are inclusive: the count must exceed a threshold to clear it.
/// Critical is evaluated first.
pub fn evaluate(info: &DaemonInfo, thresholds: &Thresholds) -> Verdict {
    let count = info.container_count;

    if let Some(critical) = thresholds.critical.filter(|limit| count <= *limit) {
        return Verdict::critical(format!(
            "Docker on {} is running {} containers (critical threshold {})",
            info.name, count, critical
        ));
    }

    if let Some(warning) = thresholds.warning.filter(|limit| count <= *limit) {
        return Verdict::warning(format!(
            "Docker on {} is running {} containers (warning threshold {})",
            info.name, count, warning
        ));
    }

    Verdict::ok(format!(
        "Docker {} on {} ({}, kernel {}) is running {} containers \
         ({} running, {} paused, {} stopped)",
        info.server_version.as_deref().unwrap_or("unknown"),
        info.name,
        info.operating_system.as_deref().unwrap_or("unknown OS"),
        info.kernel_version.as_deref().unwrap_or("unknown"),
        count,
        info.containers_running,
        info.containers_paused,
        info.containers_stopped
    ))
}
