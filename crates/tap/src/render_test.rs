//! Tests for the renderer

use super::*;
use crate::config::Builder;

fn config_of(builder: Builder<i32>) -> Arc<TapConfig<i32>> {
    builder.build().into_config()
}

fn next(v: i32) -> Message<i32> {
    Message::new(Notification::Next(v))
}

#[test]
fn test_value_rendered_through_template() {
    let renderer = Renderer::new(config_of(Builder::new().show_value()));

    let out = renderer.render(&next(42)).unwrap();
    assert_eq!(out.line, "42");
    assert_eq!(out.level, Level::Info);
    assert!(out.error.is_none());
}

#[test]
fn test_prefix_applies_to_value() {
    let renderer = Renderer::new(config_of(Builder::new().on_next_prefix("got ")));

    let out = renderer.render(&next(7)).unwrap();
    assert_eq!(out.line, "got 7");
}

#[test]
fn test_annotation_joined_with_comma() {
    let renderer = Renderer::new(config_of(Builder::new().show_value()));

    let message = next(3).append("count=3");
    let out = renderer.render(&message).unwrap();
    assert_eq!(out.line, "3, count=3");
}

#[test]
fn test_no_template_renders_annotation_only() {
    let renderer = Renderer::new(config_of(Builder::new()));

    let message = next(3).append("count=3");
    let out = renderer.render(&message).unwrap();
    assert_eq!(out.line, "count=3");
}

#[test]
fn test_on_next_disabled_renders_nothing() {
    let renderer = Renderer::new(config_of(Builder::new().show_value().on_next(false)));
    assert!(renderer.render(&next(1)).is_none());
}

#[test]
fn test_custom_value_extraction() {
    let renderer = Renderer::new(config_of(
        Builder::new().show_value().value(|v: &i32| v * 10),
    ));

    let out = renderer.render(&next(4)).unwrap();
    assert_eq!(out.line, "40");
}

#[test]
fn test_error_line_carries_error() {
    let renderer = Renderer::new(config_of(Builder::new().on_error_prefix("failed: ")));

    let err: StreamError = Arc::new(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
    let message = Message::new(Notification::<i32>::Error(err));
    let out = renderer.render(&message).unwrap();

    assert_eq!(out.line, "failed: boom");
    assert_eq!(out.level, Level::Error);
    assert_eq!(out.error.unwrap().to_string(), "boom");
}

#[test]
fn test_error_without_template_renders_annotation_only() {
    let renderer = Renderer::new(config_of(Builder::new()));

    let err: StreamError = Arc::new(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
    let message = Message::new(Notification::<i32>::Error(err)).append("count=2");
    let out = renderer.render(&message).unwrap();

    assert_eq!(out.line, "count=2");
    assert!(out.error.is_some());
}

#[test]
fn test_on_error_disabled_renders_nothing() {
    let renderer = Renderer::new(config_of(Builder::new().on_error(false)));

    let err: StreamError = Arc::new(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
    assert!(renderer
        .render(&Message::new(Notification::<i32>::Error(err)))
        .is_none());
}

#[test]
fn test_completion_message_with_annotation() {
    let renderer = Renderer::new(config_of(Builder::new()));

    let message = Message::new(Notification::<i32>::Completed).append("files=6");
    let out = renderer.render(&message).unwrap();

    assert_eq!(out.line, "onCompleted, files=6");
    assert_eq!(out.level, Level::Info);
}

#[test]
fn test_memory_text_appended_when_enabled() {
    let renderer = Renderer::new(config_of(Builder::new().show_value().show_memory()));

    let out = renderer.render(&next(1)).unwrap();
    assert!(out.line.starts_with("1, usedMem="), "got {:?}", out.line);
}

#[test]
fn test_stack_trace_appended_when_enabled() {
    let renderer = Renderer::new(config_of(Builder::new().show_value().show_stack_trace()));

    let out = renderer.render(&next(1)).unwrap();
    assert!(out.line.starts_with('1'));
    assert!(out.line.contains('\n'), "expected a multi-line backtrace");
}
