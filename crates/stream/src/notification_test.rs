//! Tests for Notification

use super::*;
use std::sync::Arc;

fn error(text: &str) -> StreamError {
    Arc::new(std::io::Error::new(std::io::ErrorKind::Other, text.to_string()))
}

#[test]
fn test_next_accessors() {
    let n = Notification::Next(42);
    assert!(n.is_next());
    assert!(!n.is_error());
    assert!(!n.is_completed());
    assert!(!n.is_terminal());
    assert_eq!(n.kind(), NotificationKind::Next);
    assert_eq!(n.value(), Some(&42));
    assert!(n.error().is_none());
}

#[test]
fn test_error_accessors() {
    let n: Notification<i32> = Notification::Error(error("boom"));
    assert!(n.is_error());
    assert!(n.is_terminal());
    assert_eq!(n.kind(), NotificationKind::Error);
    assert!(n.value().is_none());
    assert_eq!(n.error().unwrap().to_string(), "boom");
}

#[test]
fn test_completed_accessors() {
    let n: Notification<i32> = Notification::Completed;
    assert!(n.is_completed());
    assert!(n.is_terminal());
    assert_eq!(n.kind(), NotificationKind::Completed);
    assert!(n.value().is_none());
    assert!(n.error().is_none());
}

#[test]
fn test_clone_shares_error_payload() {
    let n: Notification<i32> = Notification::Error(error("shared"));
    let m = n.clone();
    let a = n.error().unwrap();
    let b = m.error().unwrap();
    // Same allocation behind both clones
    assert!(Arc::ptr_eq(a, b));
}
