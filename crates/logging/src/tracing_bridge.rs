//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and a [`Logger`].
//!
//! [`LoggerLayer`] is a tracing-subscriber layer that turns tracing events
//! into logger records, so libraries instrumented with the standard
//! `tracing` macros show up in the same console or file as direct calls.
//!
//! # Level mapping
//!
//! | tracing | severity |
//! |---|---|
//! | `ERROR` | [`Severity::Error`] |
//! | `WARN` | [`Severity::Warning`] |
//! | `INFO` | [`Severity::Info`] |
//! | `DEBUG`, `TRACE` | [`Severity::Debug`] |
//!
//! The logger's threshold is consulted before any field is formatted.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logging::{Logger, init_tracing};
//!
//! let logger = Arc::new(Logger::new());
//! init_tracing(Arc::clone(&logger))?;
//!
//! tracing::warn!(attempt = 3, "retrying");
//! ```

use std::fmt::{self, Write as _};
use std::io::Write;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::util::TryInitError;

use crate::levels::Severity;
use crate::logger::Logger;
use crate::record::SourceLocation;

/// A tracing layer that forwards events into a shared [`Logger`].
pub struct LoggerLayer<W> {
    logger: Arc<Logger<W>>,
}

impl<W> LoggerLayer<W> {
    /// Create a layer that writes through `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger<W>>) -> Self {
        Self { logger }
    }

    /// Returns the logger events are forwarded to.
    #[must_use]
    pub const fn logger(&self) -> &Arc<Logger<W>> {
        &self.logger
    }

    /// Map a tracing level to a severity.
    const fn level_to_severity(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            Level::DEBUG | Level::TRACE => Severity::Debug,
        }
    }
}

impl<W> fmt::Debug for LoggerLayer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerLayer")
            .field("logger", &self.logger)
            .finish()
    }
}

impl<S, W> Layer<S> for LoggerLayer<W>
where
    S: Subscriber,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::level_to_severity(metadata.level());
        if !self.logger.enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let location = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => Some(SourceLocation::new(file, line)),
            _ => None,
        };
        self.logger
            .log_at(severity, location, format_args!("{}", visitor.finish()));
    }
}

/// Visitor that renders the `message` field followed by `name=value` pairs.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.message.is_empty() {
            self.fields
        } else if self.fields.is_empty() {
            self.message
        } else {
            format!("{} {}", self.message, self.fields)
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}

/// Install a global subscriber that forwards every event into `logger`.
///
/// Fails when a global subscriber is already set.
pub fn init_tracing<W>(logger: Arc<Logger<W>>) -> Result<(), TryInitError>
where
    W: Write + Send + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .try_init()
}
