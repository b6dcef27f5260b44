//! Trait definitions for the Backlog AI generation client.
//!
//! These are the seams the generation client is assembled from: a transport
//! that talks to the model, a provider that resolves the API key, and a
//! store the key is persisted in.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{CredentialProvider, CredentialStore, TextGenerator};
