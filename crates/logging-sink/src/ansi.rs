//! ANSI SGR color escapes used to decorate log labels.

/// Escape sequence that restores the terminal's default attributes.
pub const RESET: &str = "\x1b[0m";

/// Foreground colors applied to a line's label.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AnsiColor {
    /// Standard red (`31`).
    Red,
    /// Bright red (`91`).
    BrightRed,
    /// Bright green (`92`).
    BrightGreen,
    /// Bright yellow (`93`).
    BrightYellow,
    /// Bright white (`97`).
    BrightWhite,
    /// No color: emits the reset sequence so the terminal default applies.
    Reset,
}

impl AnsiColor {
    /// Returns the escape sequence that selects this color.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::{AnsiColor, RESET};
    ///
    /// assert_eq!(AnsiColor::BrightRed.escape(), "\x1b[91m");
    /// assert_eq!(AnsiColor::Reset.escape(), RESET);
    /// ```
    #[must_use]
    pub const fn escape(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::BrightRed => "\x1b[91m",
            Self::BrightGreen => "\x1b[92m",
            Self::BrightYellow => "\x1b[93m",
            Self::BrightWhite => "\x1b[97m",
            Self::Reset => RESET,
        }
    }
}
