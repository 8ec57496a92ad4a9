//! Tests for the builder and frozen configuration

use super::*;
use tapline_sinks::CaptureSink;

#[test]
fn test_default_messages_and_levels() {
    let config = Builder::<i32>::new().build().into_config();

    assert_eq!(config.subscribed_message.as_deref(), Some("onSubscribe"));
    assert_eq!(config.subscribed_level, Level::Debug);
    assert_eq!(config.unsubscribed_message.as_deref(), Some("onUnsubscribe"));
    assert_eq!(config.unsubscribed_level, Level::Debug);
    assert_eq!(config.completed_message.as_deref(), Some("onCompleted"));
    assert_eq!(config.completed_level, Level::Info);
    assert!(config.log_on_next);
    assert_eq!(config.on_next_level, Level::Info);
    assert!(config.log_on_error);
    assert_eq!(config.on_error_level, Level::Error);
    assert!(config.on_next_template.is_none());
    assert!(config.stages.is_empty());
    assert!(!config.show_memory);
    assert!(!config.show_stack_trace);
}

#[test]
fn test_default_logger_name() {
    let config = Builder::<i32>::new().build().into_config();
    assert_eq!(config.logger.name(), DEFAULT_LOGGER_NAME);
}

#[test]
fn test_explicit_name_wins_over_default() {
    let config = Builder::<i32>::new().name("my.stream").build().into_config();
    assert_eq!(config.logger.name(), "my.stream");
}

#[test]
fn test_explicit_sink_keeps_name() {
    let sink = CaptureSink::new();
    let config = Builder::<i32>::new()
        .name("named")
        .sink(Arc::new(sink.clone()))
        .build()
        .into_config();

    config.logger.log(Level::Info, "hello", None);
    let records = sink.records();
    assert_eq!(records[0].name, "named");
}

#[test]
fn test_for_type_names_after_the_type() {
    struct FileScanner;
    let config = Builder::<i32>::new().for_type::<FileScanner>().build().into_config();
    assert!(config.logger.name().ends_with("FileScanner"));
}

#[test]
fn test_show_value_sets_identity_template() {
    let config = Builder::<i32>::new().show_value().build().into_config();
    assert_eq!(config.on_next_template.as_deref(), Some("{}"));
    assert!(config.value_fn.is_some());
}

#[test]
fn test_prefix_then_exclude_value_drops_next_template_only() {
    let config = Builder::<i32>::new()
        .prefix("count every test")
        .exclude_value()
        .build()
        .into_config();

    assert!(config.on_next_template.is_none());
    assert_eq!(
        config.on_error_template.as_deref(),
        Some("count every test{}")
    );
}

#[test]
fn test_stage_order_is_configuration_order() {
    let config = Builder::<i32>::new()
        .count("files")
        .every(2)
        .window(1, 10)
        .build()
        .into_config();

    let names: Vec<_> = config.stages.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["count", "every", "window"]);
}

#[test]
fn test_every_below_two_adds_no_stage() {
    let config = Builder::<i32>::new().every(1).every(0).build().into_config();
    assert!(config.stages.is_empty());
}

#[test]
fn test_when_and_sample_and_custom_stages() {
    let config = Builder::<i32>::new()
        .when(|v| *v > 0)
        .sample(Duration::from_millis(10))
        .to(|| Box::new(tapline_transform::NoopStage::new()))
        .build()
        .into_config();

    let names: Vec<_> = config.stages.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["when", "sample", "custom"]);
}
