//! Tests for the memory usage helper

use super::*;

#[test]
fn test_has_expected_shape() {
    let text = memory_usage();
    assert!(text.starts_with("usedMem="), "got {text:?}");
    assert!(text.contains("percentMem="), "got {text:?}");
    assert!(text.contains("totalMem="), "got {text:?}");
    assert!(text.ends_with("MB"), "got {text:?}");
}

#[cfg(target_os = "linux")]
#[test]
fn test_linux_reports_total_memory() {
    assert!(total_memory_bytes() > 0);
}
