//! Test utilities for generation tests.
//!
//! This module provides a mock transport and credential helpers.

pub mod mock_generator;

#[allow(unused_imports)]
pub use mock_generator::{MockBehavior, MockGenerator};

use backlog_credentials::{
    BuildDefaultCredential, CredentialChain, MemoryCredentialStore, StaticCredential,
    StoredCredential,
};
use std::sync::Arc;

/// Sample PRD reply with all four keys.
#[allow(dead_code)]
pub const PRD_JSON: &str =
    r#"{"title":"A","product_objective":"B","business_goal":"C","user_impact":"D"}"#;

/// Credentials that always resolve to `test-key`.
#[allow(dead_code)]
pub fn test_credentials() -> StaticCredential {
    StaticCredential::from_value("test-key")
}

/// The standard lookup order with an empty store and no build default.
#[allow(dead_code)]
pub fn no_credentials() -> CredentialChain {
    CredentialChain::new()
        .with(StoredCredential::new(
            Arc::new(MemoryCredentialStore::new()),
            "gemini_api_key",
        ))
        .with(BuildDefaultCredential::with_value(None))
}
