//! Tests for StageFactory

use super::*;
use crate::message::Message;
use crate::noop::NoopStage;
use crate::Stage;
use std::sync::Arc;
use std::time::Duration;
use tapline_stream::Notification;

fn next(v: i32) -> Message<i32> {
    Message::new(Notification::Next(v))
}

#[test]
fn test_build_produces_named_stage() {
    let factories: Vec<StageFactory<i32>> = vec![
        StageFactory::Count {
            label: "n".into(),
        },
        StageFactory::EveryN { n: 2 },
        StageFactory::Window {
            start: Some(1),
            finish: Some(2),
        },
        StageFactory::Sample {
            period: Duration::from_millis(10),
        },
    ];

    let names: Vec<_> = factories.iter().map(|f| f.build().name()).collect();
    assert_eq!(names, vec!["count", "every", "window", "sample"]);
}

#[test]
fn test_each_build_starts_fresh() {
    let factory: StageFactory<i32> = StageFactory::Count {
        label: "count".into(),
    };

    let mut first = factory.build();
    first.apply(next(1)).unwrap();
    first.apply(next(2)).unwrap();

    // A second build has its own zeroed counter
    let mut second = factory.build();
    let out = second.apply(next(1)).unwrap().unwrap();
    assert_eq!(out.annotation(), "count=1");
}

#[test]
fn test_custom_factory_is_called_per_build() {
    let factory: StageFactory<i32> = StageFactory::Custom {
        build: Arc::new(|| Box::new(NoopStage::new())),
    };

    assert_eq!(factory.build().name(), "noop");
    assert_eq!(factory.name(), "custom");
}

#[test]
fn test_clone_shares_predicate() {
    let factory: StageFactory<i32> = StageFactory::When {
        predicate: Arc::new(|v| *v > 2),
    };
    let cloned = factory.clone();

    let mut stage = cloned.build();
    assert!(stage.apply(next(1)).unwrap().is_none());
    assert!(stage.apply(next(3)).unwrap().is_some());
}
