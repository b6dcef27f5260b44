//! Credential storage error types.

/// Kinds of credential storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to read the store file
    #[display("Failed to read credential store: {}", _0)]
    FileRead(String),
    /// Failed to write the store file
    #[display("Failed to write credential store: {}", _0)]
    FileWrite(String),
    /// Failed to create the directory holding the store
    #[display("Failed to create credential store directory: {}", _0)]
    DirectoryCreation(String),
    /// Store contents are not a JSON object of strings
    #[display("Corrupt credential store: {}", _0)]
    Corrupt(String),
    /// No platform configuration directory to place the store in
    #[display("No configuration directory available for the credential store")]
    NoConfigDir,
}

/// Credential storage error with location tracking.
///
/// # Examples
///
/// ```
/// use backlog_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Corrupt("expected object".to_string()));
/// assert!(format!("{}", err).contains("Corrupt credential store"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
