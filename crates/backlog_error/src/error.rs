//! Top-level error wrapper types.

use crate::{ConfigError, GenerationError, StorageError};

/// Every error the workspace can surface.
///
/// # Examples
///
/// ```
/// use backlog_error::{BacklogError, BacklogErrorKind, ConfigError};
///
/// let err: BacklogError = ConfigError::new("bad toml").into();
/// assert!(matches!(err.kind(), BacklogErrorKind::Config(_)));
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum BacklogErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Credential storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Generation error
    #[from(GenerationError)]
    Generation(GenerationError),
}

/// Backlog error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Backlog Error: {}", _0)]
pub struct BacklogError(Box<BacklogErrorKind>);

impl BacklogError {
    /// Create a new error from a kind.
    pub fn new(kind: BacklogErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BacklogErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to BacklogErrorKind
impl<T> From<T> for BacklogError
where
    T: Into<BacklogErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Backlog operations.
///
/// # Examples
///
/// ```
/// use backlog_error::{BacklogResult, StorageError, StorageErrorKind};
///
/// fn read_store() -> BacklogResult<String> {
///     Err(StorageError::new(StorageErrorKind::NoConfigDir))?
/// }
/// assert!(read_store().is_err());
/// ```
pub type BacklogResult<T> = std::result::Result<T, BacklogError>;
