//! crates/logging/src/record.rs
//! One record on its way to a sink: severity, timestamp, origin and body.

use std::fmt;
use std::io::{self, Write};
use std::panic::Location;

use logging_sink::{AnsiColor, Line, RecordSink, SourceTag};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::levels::Severity;

/// `YYYY/MM/DD - hh:mm:ss`, zero padded.
pub const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]/[month]/[day] - [hour]:[minute]:[second]");

/// Renders `timestamp` with [`TIMESTAMP_FORMAT`].
///
/// # Examples
///
/// ```
/// use logging::format_timestamp;
/// use time::macros::datetime;
///
/// assert_eq!(
///     format_timestamp(datetime!(2023-09-02 08:05:09 UTC)),
///     "2023/09/02 - 08:05:09"
/// );
/// ```
#[must_use]
pub fn format_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).unwrap_or_default()
}

/// Call site a record was emitted from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
}

impl SourceLocation {
    /// Creates a location from its parts.
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Captures the location of the caller, following `#[track_caller]` frames.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::SourceLocation;
    ///
    /// let location = SourceLocation::caller();
    /// assert_eq!(location.line(), line!() - 1);
    /// ```
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line())
    }

    /// Returns the file path as reported by the compiler.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Returns the one-based line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Converts the location into the sink's `[file:line]` segment.
    #[must_use]
    pub const fn tag(&self) -> SourceTag<'static> {
        SourceTag {
            file: self.file,
            line: self.line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Color scheme applied to labels, chosen by destination.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Palette {
    /// Interactive console.
    Console,
    /// Colored log file.
    File,
}

impl Palette {
    /// Returns the label color for `severity`.
    ///
    /// Both palettes agree except for [`Severity::Debug`], which is bright
    /// white on the console and the plain reset color in files.
    #[must_use]
    pub const fn color(self, severity: Severity) -> AnsiColor {
        match (severity, self) {
            (Severity::Critical, _) => AnsiColor::Red,
            (Severity::Error, _) => AnsiColor::BrightRed,
            (Severity::Warning, _) => AnsiColor::BrightYellow,
            (Severity::Info, _) => AnsiColor::BrightGreen,
            (Severity::Debug, Self::Console) => AnsiColor::BrightWhite,
            (Severity::Debug, Self::File) | (Severity::None, _) => AnsiColor::Reset,
        }
    }
}

/// Reports whether lines of `severity` carry a `[file:line]` segment.
#[must_use]
pub const fn carries_location(severity: Severity) -> bool {
    matches!(
        severity,
        Severity::Critical | Severity::Error | Severity::Debug
    )
}

/// A single emission, alive for the duration of one logging call.
#[derive(Clone, Copy, Debug)]
pub struct LogRecord<'a> {
    severity: Severity,
    timestamp: OffsetDateTime,
    location: Option<SourceLocation>,
    body: fmt::Arguments<'a>,
}

impl<'a> LogRecord<'a> {
    /// Creates a record without a source location.
    #[must_use]
    pub fn new(severity: Severity, timestamp: OffsetDateTime, body: fmt::Arguments<'a>) -> Self {
        Self {
            severity,
            timestamp,
            location: None,
            body,
        }
    }

    /// Attaches the call site.
    #[must_use]
    pub fn with_location(mut self, location: Option<SourceLocation>) -> Self {
        self.location = location;
        self
    }

    /// Returns the record's severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the record's timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// Returns the call site, if one was captured.
    #[must_use]
    pub const fn location(&self) -> Option<SourceLocation> {
        self.location
    }

    /// Renders the record as one line into `sink`.
    ///
    /// Records at [`Severity::None`] have no label and render nothing.
    pub fn write_to<W: Write>(&self, sink: &mut RecordSink<W>, palette: Palette) -> io::Result<()> {
        let Some(label) = self.severity.label() else {
            return Ok(());
        };

        let timestamp = format_timestamp(self.timestamp);
        let mut line = Line::new(palette.color(self.severity), label, &timestamp, self.body);
        if carries_location(self.severity) {
            if let Some(location) = self.location {
                line = line.with_location(location.tag());
            }
        }
        sink.write_line(&line)
    }
}
