//! Backlog - AI drafting for product backlogs
//!
//! Backlog turns a short topic into one of three planning artifacts using a
//! hosted Gemini model:
//!
//! - **PRD section**: a structured record with title, product objective,
//!   business goal and user impact
//! - **Strategic narrative**: Markdown with five fixed sections
//! - **Shape Up pitch**: Markdown with five fixed sections and optional
//!   extra details
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use backlog::{BacklogConfig, CredentialChain, FileCredentialStore, GeminiGenerator, GenerationClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BacklogConfig::load()?;
//!     let store = FileCredentialStore::from_config(&config.credentials)?;
//!     let client = GenerationClient::new(
//!         CredentialChain::standard(store, &config),
//!         GeminiGenerator::from_config(&config.gemini),
//!     );
//!
//!     let pitch = client.shape_up_initiative("Recurring tasks", None).await?;
//!     println!("{}", pitch);
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `gemini` - Google Gemini transport (default)
//! - `observability` - OpenTelemetry span export to stderr
//!
//! # Architecture
//!
//! - `backlog_error` - Error types
//! - `backlog_core` - Data model, configuration and tracing setup
//! - `backlog_interface` - `TextGenerator`, `CredentialProvider` and `CredentialStore` traits
//! - `backlog_credentials` - API key resolution and the local key store
//! - `backlog_models` - LLM transports
//! - `backlog_generation` - Prompts, response parsing and `GenerationClient`
//!
//! This crate (`backlog`) re-exports everything for convenience.

pub use backlog_core::*;
pub use backlog_credentials::*;
pub use backlog_error::*;
pub use backlog_generation::*;
pub use backlog_interface::*;

#[cfg(feature = "gemini")]
pub use backlog_models::*;

// OpenTelemetry observability module
#[cfg(feature = "observability")]
pub mod observability;
