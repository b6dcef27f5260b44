//! Generation error types.
//!
//! Every generation call ends in exactly one of these kinds or a result.
//! None of them are retried by the client.

/// Generation-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Topic was empty or whitespace
    #[display("Topic must not be empty")]
    EmptyTopic,
    /// No credential resolved from any source
    #[display("No API key available. Please provide an API key")]
    MissingCredential,
    /// The remote model call failed (transport, status, quota or auth)
    #[display("Remote generation failed: {}", message)]
    RemoteGeneration {
        /// HTTP status code, when the failure carried one
        status_code: Option<u16>,
        /// Message from the transport or API
        message: String,
    },
    /// The model reply did not match the required structure
    #[display("Malformed model response: {}", _0)]
    MalformedResponse(String),
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use backlog_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::MissingCredential);
/// assert!(format!("{}", err).contains("provide an API key"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a remote failure without a status code.
    ///
    /// ```
    /// use backlog_error::{GenerationError, GenerationErrorKind};
    ///
    /// let err = GenerationError::remote("connection reset");
    /// assert_eq!(
    ///     err.kind,
    ///     GenerationErrorKind::RemoteGeneration {
    ///         status_code: None,
    ///         message: "connection reset".to_string(),
    ///     }
    /// );
    /// ```
    #[track_caller]
    pub fn remote(message: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::RemoteGeneration {
            status_code: None,
            message: message.into(),
        })
    }

    /// Shorthand for a malformed model response.
    #[track_caller]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::MalformedResponse(reason.into()))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }
}

/// Result type for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;
