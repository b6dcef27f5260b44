//! Configuration error types.

use std::path::{Path, PathBuf};

/// Configuration or user-input error with source location.
///
/// Carries the offending file when the problem came from one, so a bad
/// `--config` path or a broken `backlog.toml` is named in the message.
#[derive(Debug, Clone, derive_more::Error)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Configuration file the error came from, if any
    pub path: Option<PathBuf>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use backlog_error::ConfigError;
    ///
    /// let err = ConfigError::new("API key must not be empty");
    /// assert!(err.path.is_none());
    /// assert!(err.to_string().starts_with("Configuration Error: API key"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            path: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a ConfigError tied to a configuration file.
    ///
    /// ```
    /// use backlog_error::ConfigError;
    ///
    /// let err = ConfigError::in_file("/etc/backlog.toml", "unknown field `modle`");
    /// assert!(err.to_string().contains("/etc/backlog.toml: unknown field"));
    /// ```
    #[track_caller]
    pub fn in_file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        let mut err = Self::new(message);
        err.path = Some(path.into());
        err
    }

    /// The configuration file the error came from.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration Error: ")?;
        if let Some(path) = &self.path {
            write!(f, "{}: ", path.display())?;
        }
        write!(f, "{} at line {} in {}", self.message, self.line, self.file)
    }
}
