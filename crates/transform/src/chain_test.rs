//! Tests for the stage chain

use super::*;
use crate::count::CountStage;
use crate::error::StageError;
use crate::every::EveryNStage;
use crate::noop::NoopStage;
use crate::Stage;
use tapline_stream::Notification;

fn next(v: i32) -> Message<i32> {
    Message::new(Notification::Next(v))
}

#[test]
fn test_empty_chain_passes_through() {
    let mut chain: Chain<i32> = Chain::empty();
    assert!(chain.is_empty());
    assert_eq!(chain.len(), 0);

    let out = chain.apply(next(1)).unwrap().unwrap();
    assert_eq!(out.annotation(), "");
}

#[test]
fn test_default_chain_is_empty() {
    let chain: Chain<i32> = Chain::default();
    assert!(chain.is_empty());
}

#[test]
fn test_chain_with_noop() {
    let mut chain: Chain<i32> = Chain::new(vec![Box::new(NoopStage::new())]);
    assert_eq!(chain.len(), 1);
    assert_eq!(chain.names(), vec!["noop"]);

    let out = chain.apply(next(7)).unwrap().unwrap();
    assert_eq!(*out.notification().value().unwrap(), 7);
}

#[test]
fn test_stages_run_in_configured_order() {
    // count before every(2): the counter sees all values, so the passed
    // annotations read count=2, count=4, count=6
    let mut chain: Chain<i32> = Chain::new(vec![
        Box::new(CountStage::new("count")),
        Box::new(EveryNStage::new(2)),
    ]);

    let mut annotations = Vec::new();
    for v in 1..=6 {
        if let Some(m) = chain.apply(next(v)).unwrap() {
            annotations.push(m.annotation().to_string());
        }
    }
    assert_eq!(annotations, vec!["count=2", "count=4", "count=6"]);
}

#[test]
fn test_reversed_order_changes_result() {
    // every(2) before count: the counter only sees the survivors
    let mut chain: Chain<i32> = Chain::new(vec![
        Box::new(EveryNStage::new(2)),
        Box::new(CountStage::new("count")),
    ]);

    let mut annotations = Vec::new();
    for v in 1..=6 {
        if let Some(m) = chain.apply(next(v)).unwrap() {
            annotations.push(m.annotation().to_string());
        }
    }
    assert_eq!(annotations, vec!["count=1", "count=2", "count=3"]);
}

#[test]
fn test_suppression_short_circuits_later_stages() {
    let mut chain: Chain<i32> = Chain::new(vec![
        Box::new(EveryNStage::new(2)),
        Box::new(CountStage::new("survivors")),
    ]);

    // Ordinal 1 is suppressed before the counter sees it
    assert!(chain.apply(next(1)).unwrap().is_none());
    let out = chain.apply(next(2)).unwrap().unwrap();
    assert_eq!(out.annotation(), "survivors=1");
}

#[test]
fn test_first_error_stops_the_chain() {
    struct FailingStage;

    impl Stage<i32> for FailingStage {
        fn apply(&mut self, _message: Message<i32>) -> StageResult<Option<Message<i32>>> {
            Err(StageError::failed("failing", "broken on purpose"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    let mut chain: Chain<i32> = Chain::new(vec![
        Box::new(FailingStage),
        Box::new(CountStage::new("unreached")),
    ]);

    let err = chain.apply(next(1)).unwrap_err();
    assert!(err.to_string().contains("failing"));
}

#[test]
fn test_terminal_survives_filter_heavy_chain() {
    let mut chain: Chain<i32> = Chain::new(vec![
        Box::new(EveryNStage::new(100)),
        Box::new(CountStage::new("count")),
    ]);

    for v in 1..=5 {
        assert!(chain.apply(next(v)).unwrap().is_none());
    }
    let out = chain
        .apply(Message::new(Notification::Completed))
        .unwrap()
        .unwrap();
    assert!(out.notification().is_completed());
    assert_eq!(out.annotation(), "count=0");
}

#[test]
fn test_from_factories_builds_fresh_state() {
    let factories: Vec<StageFactory<i32>> = vec![StageFactory::Count {
        label: "count".into(),
    }];

    let mut first = Chain::from_factories(&factories);
    first.apply(next(1)).unwrap();
    first.apply(next(2)).unwrap();

    let mut second = Chain::from_factories(&factories);
    let out = second.apply(next(1)).unwrap().unwrap();
    assert_eq!(out.annotation(), "count=1");
}
