//! Text formatting utilities for the IET event viewer.

use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Formats an event timestamp for display: exactly four fractional
/// digits followed by a literal `s` (e.g. `0.0167s`).
pub fn format_event_time(time: f64) -> String {
    format!("{:.4}s", time)
}

/// Formats an event payload size for display.
pub fn format_size(size_bytes: u32) -> String {
    format!("{} B", size_bytes)
}

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory())
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}
