//! Tests for PredicateStage

use super::*;
use std::sync::Arc;
use tapline_stream::Notification;

fn next(v: i32) -> Message<i32> {
    Message::new(Notification::Next(v))
}

#[test]
fn test_passes_matching_values() {
    let mut stage = PredicateStage::new(Arc::new(|v: &i32| v % 2 == 0));

    assert!(stage.apply(next(1)).unwrap().is_none());
    assert!(stage.apply(next(2)).unwrap().is_some());
    assert!(stage.apply(next(3)).unwrap().is_none());
    assert!(stage.apply(next(4)).unwrap().is_some());
}

#[test]
fn test_terminal_always_passes() {
    let mut stage = PredicateStage::new(Arc::new(|_: &i32| false));

    assert!(stage.apply(next(1)).unwrap().is_none());

    let completed = stage
        .apply(Message::new(Notification::<i32>::Completed))
        .unwrap();
    assert!(completed.is_some());

    let err: tapline_stream::StreamError = Arc::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "fail",
    ));
    let errored = stage.apply(Message::new(Notification::Error(err))).unwrap();
    assert!(errored.is_some());
}

#[test]
fn test_annotation_preserved_through_filter() {
    let mut stage = PredicateStage::new(Arc::new(|v: &i32| *v > 0));

    let seeded = next(5).append("count=5");
    let out = stage.apply(seeded).unwrap().unwrap();
    assert_eq!(out.annotation(), "count=5");
}
