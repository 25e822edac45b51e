//! Browser console sink for `tracing` events.
//!
//! # Design
//! - Flatten each event into a single line (`LEVEL target: message key=value`).
//! - Route errors and warnings to the matching console methods so devtools
//!   filtering keeps working.

use std::fmt::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// `tracing` layer that writes events to the browser console.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let meta = event.metadata();
        let line = format_line(*meta.level(), meta.target(), &visitor.finish());
        emit(*meta.level(), line);
    }
}

/// Collects the message and structured fields of an event.
#[derive(Debug, Default)]
pub(crate) struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    pub(crate) fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields.trim_start().to_string()
        } else {
            format!("{}{}", self.message, self.fields)
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }
}

pub(crate) fn format_line(level: Level, target: &str, body: &str) -> String {
    format!("{level} {target}: {body}")
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: String) {
    match level {
        Level::ERROR => gloo::console::error!(line),
        Level::WARN => gloo::console::warn!(line),
        Level::INFO => gloo::console::info!(line),
        _ => gloo::console::debug!(line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, _line: String) {}
