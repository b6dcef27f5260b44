//! AI-assisted drafting of PRDs, strategic narratives and Shape Up pitches.
//!
//! Each call runs the same short pipeline:
//!
//! 1. reject an empty topic
//! 2. resolve an API key through a [`CredentialProvider`]
//! 3. build a prompt for the request kind ([`build_prompt`])
//! 4. send it once through a [`TextGenerator`]
//! 5. for PRDs only, strip code fences and parse the reply ([`parse_prd`])
//!
//! Nothing is retried or cached between calls.
//!
//! [`CredentialProvider`]: backlog_interface::CredentialProvider
//! [`TextGenerator`]: backlog_interface::TextGenerator

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod prompt;
mod response;

pub use client::GenerationClient;
pub use prompt::{NARRATIVE_SECTIONS, SHAPE_UP_SECTIONS, build_prompt};
pub use response::{parse_prd, sanitize_response};
