//! crates/logging/src/logger.rs
//! The logging engine: threshold gating, target switching and record output.

use std::fmt;
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use logging_sink::{FileSink, RecordSink};
use time::{OffsetDateTime, UtcOffset};

use crate::config::{LogFilePath, LoggerConfig, OutputTarget};
use crate::levels::Severity;
use crate::record::{LogRecord, Palette, SourceLocation};

/// Body of the warning emitted when `set_file` rejects a path.
pub const INVALID_PATH_WARNING: &str =
    "Given log file name is not valid. Logs shall be printed to the stdout.";

/// Body of the warning emitted when the configured file cannot be opened.
pub const FILE_FALLBACK_WARNING: &str = "Log file cannot be opened. Printing logs to the stdout...";

/// Leveled logger writing to a console writer or a log file.
///
/// Every method takes `&self`, so a logger can live in a `static` or behind an
/// [`Arc`](std::sync::Arc) and be shared between threads. Configuration sits
/// behind a read-write lock and each emission works on a snapshot of it; the
/// console writer sits behind a mutex so lines from different threads never
/// interleave.
///
/// Nothing the logger does is reported back to the caller. Invalid
/// configuration input is ignored or announced through a warning record, and
/// write failures are dropped.
///
/// # Examples
///
/// ```
/// use logging::{Logger, Severity, log_error, log_info};
/// use time::macros::datetime;
///
/// let logger = Logger::with_console(Vec::new())
///     .with_clock(|| datetime!(2023-09-02 10:11:12 UTC));
/// logger.disable_colors();
/// logger.set_level(Severity::Error);
///
/// log_info!(logger, "hidden");
/// log_error!(logger, "failed with {}", 5);
///
/// let output = String::from_utf8(logger.into_console()).unwrap();
/// assert!(output.contains("[Err] ["));
/// assert!(output.ends_with("[2023/09/02 - 10:11:12] failed with 5\n"));
/// assert!(!output.contains("hidden"));
/// ```
pub struct Logger<W = Stdout> {
    config: RwLock<LoggerConfig>,
    console: Mutex<RecordSink<W>>,
    offset: UtcOffset,
    clock: Option<fn() -> OffsetDateTime>,
}

impl Logger<Stdout> {
    /// Creates a logger writing to stdout with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_console(io::stdout())
    }
}

impl Default for Logger<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Logger<W> {
    /// Creates a logger with the default configuration and `console` as the console writer.
    #[must_use]
    pub fn with_console(console: W) -> Self {
        Self::with_config(console, LoggerConfig::default())
    }

    /// Creates a logger with an explicit configuration.
    ///
    /// The local UTC offset resolved here is the fallback for records whose
    /// own offset lookup fails; when it cannot be determined either,
    /// timestamps are rendered in UTC.
    #[must_use]
    pub fn with_config(console: W, config: LoggerConfig) -> Self {
        Self {
            config: RwLock::new(config),
            console: Mutex::new(RecordSink::new(console)),
            offset: UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
            clock: None,
        }
    }

    /// Replaces the time source used for timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Returns a snapshot of the current configuration.
    #[must_use]
    pub fn config(&self) -> LoggerConfig {
        self.read_config().clone()
    }

    /// Reports whether a record of `severity` would be emitted.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        self.read_config().threshold.permits(severity)
    }

    /// Runs `f` against the console writer.
    pub fn with_console_ref<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        f(self.lock_console().get_ref())
    }

    /// Consumes the logger and returns the console writer.
    #[must_use]
    pub fn into_console(self) -> W {
        self.console
            .into_inner()
            .unwrap_or_else(|poison| poison.into_inner())
            .into_inner()
    }

    /// Sets the threshold.
    pub fn set_level(&self, severity: Severity) {
        self.write_config().threshold = severity;
    }

    /// Sets the threshold from its numeric value.
    ///
    /// Values outside `0..=5` leave the threshold unchanged.
    pub fn set_level_raw(&self, value: u8) {
        if let Some(severity) = Severity::from_u8(value) {
            self.set_level(severity);
        }
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn get_level(&self) -> Severity {
        self.read_config().threshold
    }

    /// Enables ANSI colors.
    pub fn enable_colors(&self) {
        self.write_config().colors_enabled = true;
    }

    /// Replaces the whole configuration.
    pub fn apply(&self, config: LoggerConfig) {
        *self.write_config() = config;
    }

    fn read_config(&self) -> RwLockReadGuard<'_, LoggerConfig> {
        self.config.read().unwrap_or_else(|poison| poison.into_inner())
    }

    fn write_config(&self) -> RwLockWriteGuard<'_, LoggerConfig> {
        self.config
            .write()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn lock_console(&self) -> MutexGuard<'_, RecordSink<W>> {
        self.console
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn now(&self) -> OffsetDateTime {
        match self.clock {
            Some(clock) => clock(),
            None => OffsetDateTime::now_utc().to_offset(self.local_offset()),
        }
    }

    /// Looks the offset up again for every record so daylight-saving changes
    /// reach long-running processes.
    fn local_offset(&self) -> UtcOffset {
        UtcOffset::current_local_offset().unwrap_or(self.offset)
    }
}

impl<W: Write> Logger<W> {
    /// Disables ANSI colors and immediately writes a reset sequence to the console.
    pub fn disable_colors(&self) {
        self.write_config().colors_enabled = false;
        self.write_console_reset();
    }

    /// Sends records to a plain-text file at `path`.
    ///
    /// Colors are disabled as with [`disable_colors`](Self::disable_colors).
    /// An invalid path leaves the target unchanged and is announced through a
    /// warning record. The file itself is only opened when a record is
    /// written.
    pub fn set_file(&self, path: impl AsRef<Path>) {
        match LogFilePath::new(path) {
            Ok(path) => {
                {
                    let mut config = self.write_config();
                    config.target = OutputTarget::File(path);
                    config.colors_enabled = false;
                }
                self.write_console_reset();
            }
            Err(_) => self.log_at(
                Severity::Warning,
                None,
                format_args!("{}", INVALID_PATH_WARNING),
            ),
        }
    }

    /// Sends records to a file at `path`, keeping ANSI colors in it.
    pub fn set_file_with_color(&self, path: impl AsRef<Path>) {
        match LogFilePath::new(path) {
            Ok(path) => {
                let mut config = self.write_config();
                config.target = OutputTarget::File(path);
                config.colors_enabled = true;
            }
            Err(_) => self.log_at(
                Severity::Warning,
                None,
                format_args!("{}", INVALID_PATH_WARNING),
            ),
        }
    }

    /// Emits a record of `severity` tagged with the caller's location.
    #[track_caller]
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.log_at(severity, Some(SourceLocation::caller()), args);
    }

    /// Emits a critical record.
    #[track_caller]
    pub fn log_critical(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Critical, args);
    }

    /// Emits an error record.
    #[track_caller]
    pub fn log_error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    /// Emits a warning record.
    #[track_caller]
    pub fn log_warning(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, args);
    }

    /// Emits an info record.
    #[track_caller]
    pub fn log_info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    /// Emits a debug record.
    #[track_caller]
    pub fn log_debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args);
    }

    /// Emits a record with an explicit source location.
    ///
    /// A body that is statically empty (`format_args!("")`) emits nothing.
    pub fn log_at(
        &self,
        severity: Severity,
        location: Option<SourceLocation>,
        args: fmt::Arguments<'_>,
    ) {
        if args.as_str() == Some("") {
            return;
        }

        let config = {
            let config = self.read_config();
            if !config.threshold.permits(severity) {
                return;
            }
            config.clone()
        };

        let record = LogRecord::new(severity, self.now(), args).with_location(location);
        self.emit(&config, &record);
    }

    fn emit(&self, config: &LoggerConfig, record: &LogRecord<'_>) {
        let Some(path) = config.target.file() else {
            self.write_console(record, config.colors_enabled);
            return;
        };

        match FileSink::open_append(path, config.colors_enabled) {
            Ok(mut file) => {
                let _ = record.write_to(&mut *file, Palette::File);
                let _ = file.finish();
            }
            Err(_) => {
                let colors = self.fall_back_to_console(path);
                self.write_console(record, colors);
            }
        }
    }

    /// Reverts a failed file target to the console and announces it.
    ///
    /// The target is only cleared if it still names `failed`. Returns the
    /// color flag in effect afterwards.
    fn fall_back_to_console(&self, failed: &LogFilePath) -> bool {
        let colors = {
            let mut config = self.write_config();
            if config.target.file() == Some(failed) {
                config.target = OutputTarget::Console;
                config.colors_enabled = true;
            }
            config.colors_enabled
        };

        self.write_console(
            &LogRecord::new(
                Severity::Warning,
                self.now(),
                format_args!("{}", FILE_FALLBACK_WARNING),
            ),
            true,
        );
        colors
    }

    fn write_console(&self, record: &LogRecord<'_>, colors: bool) {
        let mut console = self.lock_console();
        console.set_colors(colors);
        let _ = record.write_to(&mut *console, Palette::Console);
        let _ = console.flush();
    }

    fn write_console_reset(&self) {
        let _ = self.lock_console().write_reset();
    }
}

impl<W> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &*self.read_config())
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}
