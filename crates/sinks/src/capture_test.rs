//! Tests for CaptureSink

use super::*;

#[test]
fn test_records_in_dispatch_order() {
    let sink = CaptureSink::new();

    sink.log("app", Level::Debug, "first", None);
    sink.log("app", Level::Info, "second", None);

    assert_eq!(
        sink.lines(),
        vec![
            (Level::Debug, "first".to_string()),
            (Level::Info, "second".to_string()),
        ]
    );
}

#[test]
fn test_records_error_text() {
    let sink = CaptureSink::new();
    let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");

    sink.log("app", Level::Error, "failed", Some(&err));

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "app");
    assert_eq!(records[0].error.as_deref(), Some("boom"));
}

#[test]
fn test_clones_share_buffer() {
    let sink = CaptureSink::new();
    let reader = sink.clone();

    sink.log("app", Level::Info, "hello", None);

    assert_eq!(reader.len(), 1);
    reader.clear();
    assert!(sink.is_empty());
}
