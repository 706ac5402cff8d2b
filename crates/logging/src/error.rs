//! crates/logging/src/error.rs
//!
//! Error types for configuration input.
//!
//! None of these ever reach a caller of the emitting or configuring methods
//! on [`Logger`](crate::Logger); they exist for hosts that validate input
//! ahead of time through the typed constructors.

use thiserror::Error;

/// A raw severity value outside `0..=5`.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("severity value {0} is out of range 0..=5")]
pub struct InvalidSeverity(pub u8);

/// Error returned when parsing a [`Severity`](crate::Severity) from a string fails.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unrecognised log severity `{input}`")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Reasons a log file path is rejected.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum PathError {
    /// The path is empty.
    #[error("log file path is empty")]
    Empty,
    /// The path does not fit the path budget.
    #[error("log file path is {len} bytes long, the limit is {max}")]
    TooLong {
        /// Length of the rejected path in bytes.
        len: usize,
        /// Longest accepted path in bytes.
        max: usize,
    },
}

/// Errors raised while applying configuration directives.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// A directive was empty.
    #[error("empty configuration directive")]
    EmptyDirective,
    /// A directive had no `key=value` form.
    #[error("directive `{0}` is missing a `=` value")]
    MissingValue(String),
    /// The directive key is not recognised.
    #[error("unknown configuration directive `{0}`")]
    UnknownKey(String),
    /// A color switch was not one of the accepted spellings.
    #[error("invalid color switch `{0}`")]
    InvalidSwitch(String),
    /// The severity value did not parse.
    #[error(transparent)]
    Severity(#[from] ParseSeverityError),
    /// The file path was rejected.
    #[error(transparent)]
    Path(#[from] PathError),
    /// The environment variable holds non-UTF-8 data.
    #[error("environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_severity_reports_value() {
        let err = InvalidSeverity(9);
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn parse_error_keeps_input() {
        let err = ParseSeverityError::new("loud");
        assert_eq!(err.input(), "loud");
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn path_error_messages() {
        assert_eq!(PathError::Empty.to_string(), "log file path is empty");
        let err = PathError::TooLong { len: 300, max: 255 };
        assert!(err.to_string().contains("300"));
        assert!(err.to_string().contains("255"));
    }

    #[test]
    fn config_error_wraps_sources_transparently() {
        let err: ConfigError = PathError::Empty.into();
        assert_eq!(err.to_string(), "log file path is empty");

        let err: ConfigError = ParseSeverityError::new("x").into();
        assert!(matches!(err, ConfigError::Severity(_)));
    }
}
