//! Memory usage text for log lines
//!
//! Reported as `usedMem=<MB>MB, percentMem=<p>, totalMem=<MB>MB`, with
//! used memory taken from the process resident set and total from system
//! memory. Detection is platform-specific and falls back to zero where
//! unavailable.

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;

/// Render the current process memory usage as annotation text
pub fn memory_usage() -> String {
    let used = used_memory_bytes();
    let total = total_memory_bytes();
    let percent = if total > 0 {
        used as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    format!(
        "usedMem={}MB, percentMem={:.1}, totalMem={}MB",
        used / 1_000_000,
        percent,
        total / 1_000_000
    )
}

#[cfg(target_os = "linux")]
fn used_memory_bytes() -> u64 {
    std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|content| {
            content
                .lines()
                .find(|line| line.starts_with("VmRSS:"))
                .and_then(|line| {
                    line.split_whitespace()
                        .nth(1)
                        .and_then(|kb| kb.parse::<u64>().ok())
                        .map(|kb| kb * 1024)
                })
        })
        .unwrap_or(0)
}

#[cfg(target_os = "linux")]
fn total_memory_bytes() -> u64 {
    std::fs::read_to_string("/proc/meminfo")
        .ok()
        .and_then(|content| {
            content
                .lines()
                .find(|line| line.starts_with("MemTotal:"))
                .and_then(|line| {
                    line.split_whitespace()
                        .nth(1)
                        .and_then(|kb| kb.parse::<u64>().ok())
                        .map(|kb| kb * 1024)
                })
        })
        .unwrap_or(0)
}

#[cfg(target_os = "macos")]
fn used_memory_bytes() -> u64 {
    0
}

#[cfg(target_os = "macos")]
fn total_memory_bytes() -> u64 {
    use std::process::Command;
    Command::new("sysctl")
        .args(["-n", "hw.memsize"])
        .output()
        .ok()
        .and_then(|output| {
            String::from_utf8(output.stdout)
                .ok()
                .and_then(|s| s.trim().parse().ok())
        })
        .unwrap_or(0)
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn used_memory_bytes() -> u64 {
    0
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn total_memory_bytes() -> u64 {
    0
}
