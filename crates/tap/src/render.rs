//! Message rendering
//!
//! Turns an annotated side-channel message into the final log line. The
//! pieces of a line (value or error text through its template, stage
//! annotations, memory usage, backtrace) are comma-delimited, with the
//! separator omitted around empty parts.

use std::backtrace::Backtrace;
use std::sync::Arc;

use tapline_sinks::Level;
use tapline_stream::{Notification, StreamError};
use tapline_transform::Message;

use crate::config::TapConfig;
use crate::memory::memory_usage;

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

/// One line ready for the sink
pub(crate) struct Rendered {
    pub level: Level,
    pub line: String,
    pub error: Option<StreamError>,
}

/// Converts messages to log lines per the frozen configuration
pub(crate) struct Renderer<T> {
    config: Arc<TapConfig<T>>,
}

impl<T> Renderer<T> {
    pub fn new(config: Arc<TapConfig<T>>) -> Self {
        Self { config }
    }

    /// Render one message, or `None` when its kind is not logged
    pub fn render(&self, message: &Message<T>) -> Option<Rendered> {
        match message.notification() {
            Notification::Next(value) => self.render_next(value, message.annotation()),
            Notification::Error(error) => self.render_error(error, message.annotation()),
            Notification::Completed => self.render_completed(message.annotation()),
        }
    }

    fn render_next(&self, value: &T, annotation: &str) -> Option<Rendered> {
        if !self.config.log_on_next {
            return None;
        }
        let mut line = String::new();
        if let Some(template) = &self.config.on_next_template {
            let text = self
                .config
                .value_fn
                .as_ref()
                .map(|extract| extract(value))
                .unwrap_or_default();
            line.push_str(&template.replace("{}", &text));
        }
        append_delimited(&mut line, annotation);
        if self.config.show_memory {
            append_delimited(&mut line, &memory_usage());
        }
        if self.config.show_stack_trace {
            append_stack_trace(&mut line);
        }
        Some(Rendered {
            level: self.config.on_next_level,
            line,
            error: None,
        })
    }

    fn render_error(&self, error: &StreamError, annotation: &str) -> Option<Rendered> {
        if !self.config.log_on_error {
            return None;
        }
        let mut line = String::new();
        if let Some(template) = &self.config.on_error_template {
            line.push_str(&template.replace("{}", &error.to_string()));
        }
        append_delimited(&mut line, annotation);
        if self.config.show_memory {
            append_delimited(&mut line, &memory_usage());
        }
        Some(Rendered {
            level: self.config.on_error_level,
            line,
            error: Some(Arc::clone(error)),
        })
    }

    fn render_completed(&self, annotation: &str) -> Option<Rendered> {
        let message = self.config.completed_message.as_ref()?;
        let mut line = String::new();
        append_delimited(&mut line, message);
        append_delimited(&mut line, annotation);
        if self.config.show_memory {
            append_delimited(&mut line, &memory_usage());
        }
        Some(Rendered {
            level: self.config.completed_level,
            line,
            error: None,
        })
    }
}

fn append_delimited(line: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    if !line.is_empty() {
        line.push_str(", ");
    }
    line.push_str(text);
}

fn append_stack_trace(line: &mut String) {
    let trace = Backtrace::force_capture().to_string();
    for frame in trace.lines() {
        line.push_str("\n    ");
        line.push_str(frame.trim_start());
    }
}
