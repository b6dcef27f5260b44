//! LLM transports for the Backlog AI generation client.
//!
//! Each provider sits behind its own feature flag and implements
//! [`TextGenerator`](backlog_interface::TextGenerator).
//!
//! # Available Providers
//!
//! - **Gemini** (Google) - Enabled by default with the `gemini` feature
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use backlog_core::ApiKey;
//! use backlog_interface::TextGenerator;
//! use backlog_models::GeminiGenerator;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = GeminiGenerator::new("gemini-2.5-flash");
//! let key = ApiKey::new(std::env::var("GEMINI_API_KEY")?).unwrap();
//! let text = generator.generate_text(&key, "Say hello").await?;
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::GeminiGenerator;
