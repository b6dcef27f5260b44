//! Core data types for the Backlog AI generation client.
//!
//! This crate holds the request/response model shared by every other crate,
//! the layered [`BacklogConfig`], and tracing initialization.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api_key;
mod config;
mod kind;
mod output;
mod prd;
mod request;
mod telemetry;

pub use api_key::ApiKey;
pub use config::{BacklogConfig, CredentialsConfig, GeminiConfig};
pub use kind::GenerationKind;
pub use output::GenerationOutput;
pub use prd::{PRD_FIELDS, PrdSection};
pub use request::{GenerationRequest, GenerationRequestBuilder, GenerationRequestBuilderError};
pub use telemetry::{TracingConfig, init_tracing};
