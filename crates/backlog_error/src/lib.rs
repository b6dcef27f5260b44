//! Error types for the Backlog AI generation client.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use backlog_error::{BacklogResult, ConfigError};
//!
//! fn load() -> BacklogResult<String> {
//!     Err(ConfigError::new("Missing [gemini] table"))?
//! }
//!
//! match load() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod storage;

pub use config::ConfigError;
pub use error::{BacklogError, BacklogErrorKind, BacklogResult};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
pub use storage::{StorageError, StorageErrorKind};
