//! crates/logging/src/macros.rs
//! Formatting macros that emit through a [`Logger`](crate::Logger) instance.
//!
//! Each macro expands to the matching `log_*` method with
//! [`format_args!`], so the caller's location is captured and nothing is
//! allocated for records the threshold rejects.

/// Emit a critical record.
///
/// # Example
/// ```
/// use logging::{Logger, log_critical};
///
/// let logger = Logger::with_console(Vec::new());
/// log_critical!(logger, "sensor {} offline", 3);
/// ```
#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_critical(::core::format_args!($($arg)+))
    };
}

/// Emit an error record.
///
/// # Example
/// ```
/// use logging::{Logger, log_error};
///
/// let logger = Logger::with_console(Vec::new());
/// log_error!(logger, "write failed: {}", "disk full");
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_error(::core::format_args!($($arg)+))
    };
}

/// Emit a warning record.
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_warning(::core::format_args!($($arg)+))
    };
}

/// Emit an info record.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_info(::core::format_args!($($arg)+))
    };
}

/// Emit a debug record.
///
/// # Example
/// ```
/// use logging::{Logger, Severity, log_debug};
///
/// let logger = Logger::with_console(Vec::new());
/// logger.set_level(Severity::Debug);
/// log_debug!(logger, "state = {:?}", [1, 2]);
/// assert!(logger.into_console().ends_with(b"state = [1, 2]\x1b[0m\n"));
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_debug(::core::format_args!($($arg)+))
    };
}
