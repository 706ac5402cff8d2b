#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `log4embedded` is a process-wide, leveled logger for embedded and native
//! applications. Records are gated by [`Severity`], labelled, timestamped in
//! local time and written to stdout or to a log file, optionally with ANSI
//! colors.
//!
//! The crate is a thin facade over [`logging::Logger`]: one logger writing to
//! stdout is created on first use and every free function and macro here
//! forwards to it. Hosts that need several independent loggers, or a console
//! other than stdout, use [`Logger`] directly.
//!
//! # Defaults
//!
//! The threshold starts at [`Severity::Info`], records go to stdout and colors
//! are enabled.
//!
//! # Examples
//!
//! ```no_run
//! use log4embedded::{Severity, critical, debug, info};
//!
//! log4embedded::set_level(Severity::Debug);
//! log4embedded::set_file("log/log.txt");
//!
//! info!("Hello World!");
//! debug!("Odd number: [{}]", 3);
//! critical!("sensor {} offline", "T1");
//! ```
//!
//! Configuration can also come from the `LOG4EMBEDDED` environment variable:
//!
//! ```no_run
//! // LOG4EMBEDDED="level=warn,color-file=app.log"
//! log4embedded::init_from_env()?;
//! # Ok::<(), log4embedded::ConfigError>(())
//! ```

use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};

pub use logging::{
    ConfigError, InvalidSeverity, LogFilePath, Logger, LoggerConfig, MAX_PATH_SIZE, OutputTarget,
    ParseSeverityError, PathError, Severity,
};

/// Returns the process-wide logger, creating it on first use.
pub fn logger() -> &'static Arc<Logger> {
    static LOGGER: OnceLock<Arc<Logger>> = OnceLock::new();
    LOGGER.get_or_init(|| Arc::new(Logger::new()))
}

/// Sets the threshold.
pub fn set_level(severity: Severity) {
    logger().set_level(severity);
}

/// Sets the threshold from its numeric value; values above 5 are ignored.
pub fn set_level_raw(value: u8) {
    logger().set_level_raw(value);
}

/// Returns the current threshold.
#[must_use]
pub fn get_level() -> Severity {
    logger().get_level()
}

/// Sends records to a plain-text file. See [`Logger::set_file`].
pub fn set_file(path: impl AsRef<Path>) {
    logger().set_file(path);
}

/// Sends records to a file that keeps ANSI colors. See [`Logger::set_file_with_color`].
pub fn set_file_with_color(path: impl AsRef<Path>) {
    logger().set_file_with_color(path);
}

/// Enables ANSI colors.
pub fn enable_colors() {
    logger().enable_colors();
}

/// Disables ANSI colors and writes a reset sequence to stdout.
pub fn disable_colors() {
    logger().disable_colors();
}

/// Replaces the whole configuration.
pub fn configure(config: LoggerConfig) {
    logger().apply(config);
}

/// Applies the directives in the `LOG4EMBEDDED` environment variable.
///
/// The current configuration is left untouched when the variable does not
/// parse.
pub fn init_from_env() -> Result<(), ConfigError> {
    configure(LoggerConfig::from_env()?);
    Ok(())
}

/// Routes `tracing` events through the process-wide logger.
#[cfg(feature = "tracing")]
pub fn init_tracing() -> Result<(), logging::TryInitError> {
    logging::init_tracing(Arc::clone(logger()))
}

/// Emits a critical record.
#[track_caller]
pub fn log_critical(args: fmt::Arguments<'_>) {
    logger().log_critical(args);
}

/// Emits an error record.
#[track_caller]
pub fn log_error(args: fmt::Arguments<'_>) {
    logger().log_error(args);
}

/// Emits a warning record.
#[track_caller]
pub fn log_warning(args: fmt::Arguments<'_>) {
    logger().log_warning(args);
}

/// Emits an info record.
#[track_caller]
pub fn log_info(args: fmt::Arguments<'_>) {
    logger().log_info(args);
}

/// Emits a debug record.
#[track_caller]
pub fn log_debug(args: fmt::Arguments<'_>) {
    logger().log_debug(args);
}

/// Emit a critical record through the process-wide logger.
#[macro_export]
macro_rules! critical {
    ($($arg:tt)+) => {
        $crate::log_critical(::core::format_args!($($arg)+))
    };
}

/// Emit an error record through the process-wide logger.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log_error(::core::format_args!($($arg)+))
    };
}

/// Emit a warning record through the process-wide logger.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::log_warning(::core::format_args!($($arg)+))
    };
}

/// Emit an info record through the process-wide logger.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log_info(::core::format_args!($($arg)+))
    };
}

/// Emit a debug record through the process-wide logger.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log_debug(::core::format_args!($($arg)+))
    };
}
