//! API key resolution for the Backlog AI generation client.
//!
//! A [`CredentialChain`] tries an ordered list of [`CredentialProvider`]
//! strategies and returns the first non-empty key:
//!
//! 1. an explicit key supplied by the caller ([`StaticCredential`])
//! 2. a key the user saved earlier ([`StoredCredential`] over a [`CredentialStore`])
//! 3. the configured environment variable ([`EnvironmentCredential`])
//! 4. a default baked in at build time ([`BuildDefaultCredential`])
//!
//! Saving a user-entered key is the caller's job; [`FileCredentialStore`]
//! is where it goes.
//!
//! # Example
//!
//! ```
//! use backlog_core::{ApiKey, BacklogConfig};
//! use backlog_credentials::{CredentialChain, MemoryCredentialStore};
//! use backlog_interface::{CredentialProvider, CredentialStore};
//!
//! let config = BacklogConfig::default();
//! let store = MemoryCredentialStore::new();
//! store.save(&config.credentials.storage_key, "saved-key").unwrap();
//!
//! let chain = CredentialChain::standard(store, &config);
//! assert_eq!(chain.resolve().unwrap().expose(), "saved-key");
//! ```
//!
//! [`CredentialProvider`]: backlog_interface::CredentialProvider
//! [`CredentialStore`]: backlog_interface::CredentialStore

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chain;
mod providers;
mod store;

pub use chain::CredentialChain;
pub use providers::{
    BUILD_DEFAULT_VAR, BuildDefaultCredential, EnvironmentCredential, StaticCredential,
    StoredCredential,
};
pub use store::{FileCredentialStore, MemoryCredentialStore};
