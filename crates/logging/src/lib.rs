#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is a small leveled logger. A [`Logger`] gates records by
//! [`Severity`], decorates them with a category label, an optional
//! `[file:line]` tag and a local timestamp, and writes them either to a
//! console writer or to a log file that is reopened for every record.
//!
//! # Design
//!
//! - [`Severity`] orders the levels and implements the threshold policy.
//! - [`LoggerConfig`] holds the threshold, the [`OutputTarget`] and the color
//!   switch, and can be built from `key=value` directives or the
//!   `LOG4EMBEDDED` environment variable.
//! - [`LogRecord`] renders one record through a
//!   [`RecordSink`](logging_sink::RecordSink) with the [`Palette`] of its
//!   destination.
//! - [`Logger`] ties these together behind interior locks so a single
//!   instance can be shared.
//!
//! # Invariants
//!
//! - A record is emitted only when the threshold permits its severity;
//!   [`Severity::None`] silences everything.
//! - Selecting a plain file disables colors; selecting a colored file enables
//!   them. Target and color flag never change separately.
//! - When the log file cannot be opened the logger reverts to the console,
//!   re-enables colors and announces the fallback before the record.
//!
//! # Errors
//!
//! The logger's own methods never fail. The typed constructors
//! ([`LogFilePath::new`], `Severity::try_from`,
//! [`LoggerConfig::apply_directive`]) report [`PathError`],
//! [`InvalidSeverity`] and [`ConfigError`] for callers that validate input up
//! front.
//!
//! # Examples
//!
//! ```
//! use logging::{Logger, Severity, log_debug, log_warning};
//!
//! let logger = Logger::with_console(Vec::new());
//! log_debug!(logger, "hidden at the default threshold");
//! logger.set_level(Severity::Debug);
//! log_warning!(logger, "odd number: [{}]", 3);
//!
//! let output = String::from_utf8(logger.into_console()).unwrap();
//! assert_eq!(output.lines().count(), 1);
//! assert!(output.starts_with("\x1b[93m[Warn] ["));
//! ```

mod config;
mod error;
mod levels;
mod logger;
mod macros;
mod record;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{LogFilePath, LoggerConfig, MAX_PATH_SIZE, OutputTarget};
pub use error::{ConfigError, InvalidSeverity, ParseSeverityError, PathError};
pub use levels::Severity;
pub use logger::{FILE_FALLBACK_WARNING, INVALID_PATH_WARNING, Logger};
pub use record::{
    LogRecord, Palette, SourceLocation, TIMESTAMP_FORMAT, carries_location, format_timestamp,
};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing};
#[cfg(feature = "tracing")]
pub use tracing_subscriber::util::TryInitError;
