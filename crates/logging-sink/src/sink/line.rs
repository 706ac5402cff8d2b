use std::fmt;

use crate::ansi::AnsiColor;

/// Source position rendered as `[file:line]` after a line's label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourceTag<'a> {
    /// File path as reported by the compiler.
    pub file: &'a str,
    /// One-based line number.
    pub line: u32,
}

impl fmt::Display for SourceTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.file, self.line)
    }
}

/// A fully resolved log line, ready to be rendered by a [`RecordSink`](crate::RecordSink).
///
/// The caller picks the label color and the optional source tag; the sink
/// decides whether the color is actually emitted based on its own
/// configuration.
#[derive(Clone, Copy, Debug)]
pub struct Line<'a> {
    /// Color applied to the label when the sink has colors enabled.
    pub color: AnsiColor,
    /// Bracketed category label, e.g. `[Warn]`.
    pub label: &'a str,
    /// Optional `[file:line]` segment.
    pub location: Option<SourceTag<'a>>,
    /// Pre-formatted timestamp, rendered inside brackets.
    pub timestamp: &'a str,
    /// Message body.
    pub body: fmt::Arguments<'a>,
}

impl<'a> Line<'a> {
    /// Creates a line without a source tag.
    #[must_use]
    pub fn new(
        color: AnsiColor,
        label: &'a str,
        timestamp: &'a str,
        body: fmt::Arguments<'a>,
    ) -> Self {
        Self {
            color,
            label,
            location: None,
            timestamp,
            body,
        }
    }

    /// Attaches a `[file:line]` segment.
    #[must_use]
    pub fn with_location(mut self, location: SourceTag<'a>) -> Self {
        self.location = Some(location);
        self
    }
}
