//! crates/logging/src/levels.rs
//! Ordered severities and the threshold policy built on them.

use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidSeverity, ParseSeverityError};

/// Severity of a log record, doubling as the logger's threshold.
///
/// Variants are ordered from most to least restrictive. A threshold lets a
/// record through when the record's severity is not greater than the
/// threshold, so `Debug` shows everything and `None` shows nothing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Severity {
    /// No records at all. Only meaningful as a threshold.
    None = 0,
    /// Unrecoverable conditions.
    Critical = 1,
    /// Failed operations.
    Error = 2,
    /// Suspicious but tolerated conditions.
    Warning = 3,
    /// Regular progress reports. The default threshold.
    Info = 4,
    /// Developer diagnostics.
    Debug = 5,
}

impl Severity {
    /// Every severity in ascending order of verbosity.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Critical,
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Debug,
    ];

    /// Converts a raw value, returning `None` when it is out of range.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Critical),
            2 => Some(Self::Error),
            3 => Some(Self::Warning),
            4 => Some(Self::Info),
            5 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Returns the numeric value of the severity.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase name used by [`Display`](fmt::Display) and [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Returns the bracketed category label printed at the start of a line.
    ///
    /// [`Severity::None`] has no label because nothing is ever emitted at it.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert_eq!(Severity::Critical.label(), Some("[Crit]"));
    /// assert_eq!(Severity::Debug.label(), Some("[Debug]"));
    /// assert_eq!(Severity::None.label(), None);
    /// ```
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Critical => Some("[Crit]"),
            Self::Error => Some("[Err]"),
            Self::Warning => Some("[Warn]"),
            Self::Info => Some("[Info]"),
            Self::Debug => Some("[Debug]"),
        }
    }

    /// Reports whether a threshold of `self` lets a record of `severity` through.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert!(Severity::Error.permits(Severity::Critical));
    /// assert!(Severity::Error.permits(Severity::Error));
    /// assert!(!Severity::Error.permits(Severity::Warning));
    /// assert!(!Severity::Debug.permits(Severity::None));
    /// ```
    #[must_use]
    pub const fn permits(self, severity: Self) -> bool {
        !matches!(severity, Self::None) && self.as_u8() >= severity.as_u8()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.as_u8()
    }
}

impl TryFrom<u8> for Severity {
    type Error = InvalidSeverity;

    fn try_from(value: u8) -> Result<Self, InvalidSeverity> {
        Self::from_u8(value).ok_or(InvalidSeverity(value))
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Accepts the lowercase names, their short label forms and the numeric values.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "none" | "off" | "0" => Ok(Self::None),
            "critical" | "crit" | "1" => Ok(Self::Critical),
            "error" | "err" | "2" => Ok(Self::Error),
            "warning" | "warn" | "3" => Ok(Self::Warning),
            "info" | "4" => Ok(Self::Info),
            "debug" | "dbg" | "5" => Ok(Self::Debug),
            _ => Err(ParseSeverityError::new(trimmed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_runs_from_restrictive_to_verbose() {
        assert!(Severity::None < Severity::Critical);
        assert!(Severity::Critical < Severity::Error);
        assert!(Severity::Error < Severity::Warning);
        assert!(Severity::Warning < Severity::Info);
        assert!(Severity::Info < Severity::Debug);
    }

    #[test]
    fn numeric_values_match_declaration() {
        for (index, severity) in Severity::ALL.iter().enumerate() {
            assert_eq!(usize::from(severity.as_u8()), index);
            assert_eq!(Severity::from_u8(severity.as_u8()), Some(*severity));
        }
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(Severity::try_from(5_u8), Ok(Severity::Debug));
        assert_eq!(Severity::try_from(6_u8), Err(InvalidSeverity(6)));
        assert_eq!(Severity::try_from(255_u8), Err(InvalidSeverity(255)));
    }

    #[test]
    fn u8_converts_through_try_into() {
        let parsed: Result<Severity, InvalidSeverity> = 2_u8.try_into();
        assert_eq!(parsed, Ok(Severity::Error));
        let rejected: Result<Severity, _> = 9_u8.try_into();
        assert_eq!(rejected, Err(InvalidSeverity(9)));
    }

    #[test]
    fn none_threshold_permits_nothing() {
        for severity in Severity::ALL {
            assert!(!Severity::None.permits(severity), "{severity}");
        }
    }

    #[test]
    fn debug_threshold_permits_every_emitting_severity() {
        for severity in &Severity::ALL[1..] {
            assert!(Severity::Debug.permits(*severity), "{severity}");
        }
    }

    #[test]
    fn labels_are_bracketed() {
        for severity in &Severity::ALL[1..] {
            let label = severity.label().expect("emitting severity has a label");
            assert!(label.starts_with('[') && label.ends_with(']'), "{label}");
        }
    }

    #[test]
    fn parse_accepts_names_aliases_and_digits() {
        assert_eq!("debug".parse::<Severity>(), Ok(Severity::Debug));
        assert_eq!("WARN".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!(" crit ".parse::<Severity>(), Ok(Severity::Critical));
        assert_eq!("2".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("off".parse::<Severity>(), Ok(Severity::None));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "verbose".parse::<Severity>().unwrap_err();
        assert!(err.to_string().contains("verbose"));
        assert!("6".parse::<Severity>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for severity in Severity::ALL {
            assert_eq!(severity.to_string().parse::<Severity>(), Ok(severity));
        }
    }
}
