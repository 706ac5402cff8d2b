//! crates/logging/src/config.rs
//! Logger configuration: threshold, output target and color switch.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, PathError};
use crate::levels::Severity;

/// Path budget for a log file, in bytes, including one terminator byte.
pub const MAX_PATH_SIZE: usize = 256;

/// A log file path that passed validation.
///
/// The path must be non-empty and shorter than [`MAX_PATH_SIZE`] bytes. The
/// path is not checked against the filesystem: a missing parent directory is
/// only noticed when a record is written, at which point the logger falls
/// back to the console.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PathBuf", into = "PathBuf"))]
pub struct LogFilePath(PathBuf);

impl LogFilePath {
    /// Validates `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{LogFilePath, PathError, MAX_PATH_SIZE};
    ///
    /// assert!(LogFilePath::new("log/log.txt").is_ok());
    /// assert_eq!(LogFilePath::new(""), Err(PathError::Empty));
    /// assert!(LogFilePath::new("x".repeat(MAX_PATH_SIZE)).is_err());
    /// ```
    pub fn new(path: impl AsRef<Path>) -> Result<Self, PathError> {
        let path = path.as_ref();
        let len = path.as_os_str().len();
        if len == 0 {
            return Err(PathError::Empty);
        }
        if len >= MAX_PATH_SIZE {
            return Err(PathError::TooLong {
                len,
                max: MAX_PATH_SIZE - 1,
            });
        }
        Ok(Self(path.to_path_buf()))
    }

    /// Borrows the validated path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consumes the wrapper and returns the path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for LogFilePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<PathBuf> for LogFilePath {
    type Error = PathError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        Self::new(path)
    }
}

impl From<LogFilePath> for PathBuf {
    fn from(path: LogFilePath) -> Self {
        path.0
    }
}

impl fmt::Display for LogFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.display(), f)
    }
}

/// Where records go.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputTarget {
    /// The logger's console writer (stdout for the process-wide logger).
    #[default]
    Console,
    /// A file reopened in append mode for every record.
    File(LogFilePath),
}

impl OutputTarget {
    /// Returns the file path when the target is a file.
    #[must_use]
    pub const fn file(&self) -> Option<&LogFilePath> {
        match self {
            Self::Console => None,
            Self::File(path) => Some(path),
        }
    }

    /// Reports whether records go to the console.
    #[must_use]
    pub const fn is_console(&self) -> bool {
        matches!(self, Self::Console)
    }
}

/// Complete logger configuration.
///
/// The output target and the color flag travel together: the file-selecting
/// helpers always set both so a configuration is never half applied.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Most verbose severity that is still emitted.
    pub threshold: Severity,
    /// Destination of emitted records.
    pub target: OutputTarget,
    /// Whether labels are colored and lines end with a reset sequence.
    pub colors_enabled: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            threshold: Severity::Info,
            target: OutputTarget::Console,
            colors_enabled: true,
        }
    }
}

impl LoggerConfig {
    /// Environment variable read by [`from_env`](Self::from_env).
    pub const ENV_VAR: &'static str = "LOG4EMBEDDED";

    /// Sets the threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Targets a plain-text file: colors are turned off.
    #[must_use]
    pub fn with_file(mut self, path: LogFilePath) -> Self {
        self.target = OutputTarget::File(path);
        self.colors_enabled = false;
        self
    }

    /// Targets a file that keeps ANSI escapes, for terminal viewers such as `tail`.
    #[must_use]
    pub fn with_color_file(mut self, path: LogFilePath) -> Self {
        self.target = OutputTarget::File(path);
        self.colors_enabled = true;
        self
    }

    /// Apply a single `key=value` directive (e.g. `level=debug`, `file=log/app.log`).
    ///
    /// Recognised keys:
    ///
    /// | key | value | effect |
    /// |---|---|---|
    /// | `level` | severity name or number | threshold |
    /// | `file` | path | plain file target, colors off |
    /// | `color-file` | path | colored file target, colors on |
    /// | `color` | `on`/`off`/`true`/`false`/`1`/`0` | color switch |
    pub fn apply_directive(&mut self, token: &str) -> Result<(), ConfigError> {
        let (key, value) = parse_directive(token)?;

        match key {
            "level" => self.threshold = value.parse()?,
            "file" => {
                let path = LogFilePath::new(value)?;
                self.target = OutputTarget::File(path);
                self.colors_enabled = false;
            }
            "color-file" => {
                let path = LogFilePath::new(value)?;
                self.target = OutputTarget::File(path);
                self.colors_enabled = true;
            }
            "color" => self.colors_enabled = parse_switch(value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_owned())),
        }

        Ok(())
    }

    /// Build a configuration from a comma separated directive list, applied left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{LoggerConfig, Severity};
    ///
    /// let config = LoggerConfig::from_directives("level=debug, color=off")?;
    /// assert_eq!(config.threshold, Severity::Debug);
    /// assert!(!config.colors_enabled);
    /// # Ok::<(), logging::ConfigError>(())
    /// ```
    pub fn from_directives(directives: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for token in directives.split(',').filter(|token| !token.trim().is_empty()) {
            config.apply_directive(token)?;
        }
        Ok(config)
    }

    /// Read directives from the [`ENV_VAR`](Self::ENV_VAR) environment variable.
    ///
    /// A missing variable yields the default configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(Self::ENV_VAR) {
            Ok(directives) => Self::from_directives(&directives),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(Self::ENV_VAR)),
        }
    }
}

/// Split a directive like "level=debug" into ("level", "debug").
fn parse_directive(token: &str) -> Result<(&str, &str), ConfigError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ConfigError::EmptyDirective);
    }

    match token.split_once('=') {
        Some((key, value)) => Ok((key.trim(), value.trim())),
        None => Err(ConfigError::MissingValue(token.to_owned())),
    }
}

fn parse_switch(value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidSwitch(value.to_owned())),
    }
}
