//! Ordered credential resolution.

use crate::{BuildDefaultCredential, EnvironmentCredential, StaticCredential, StoredCredential};
use backlog_core::{ApiKey, BacklogConfig};
use backlog_interface::{CredentialProvider, CredentialStore};
use tracing::debug;

/// Tries each provider in order and returns the first key found.
///
/// # Example
///
/// ```
/// use backlog_core::ApiKey;
/// use backlog_credentials::{BuildDefaultCredential, CredentialChain};
/// use backlog_interface::CredentialProvider;
///
/// let chain = CredentialChain::new()
///     .with(BuildDefaultCredential::with_value(Some("fallback")))
///     .with_explicit(ApiKey::new("typed-in").unwrap());
///
/// assert_eq!(chain.resolve().unwrap().expose(), "typed-in");
/// ```
#[derive(Default)]
pub struct CredentialChain {
    providers: Vec<Box<dyn CredentialProvider>>,
}

impl std::fmt::Debug for CredentialChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sources: Vec<_> = self.providers.iter().map(|p| p.source_name()).collect();
        f.debug_struct("CredentialChain")
            .field("sources", &sources)
            .finish()
    }
}

impl CredentialChain {
    /// Chain with no providers; resolves nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard order: stored key, environment variable, build-time default.
    pub fn standard<S>(store: S, config: &BacklogConfig) -> Self
    where
        S: CredentialStore + 'static,
    {
        let mut chain = Self::without_store(config);
        chain.providers.insert(
            0,
            Box::new(StoredCredential::from_config(store, &config.credentials)),
        );
        chain
    }

    /// Standard order for when no key store is available: environment
    /// variable, then build-time default.
    pub fn without_store(config: &BacklogConfig) -> Self {
        Self::new()
            .with(EnvironmentCredential::from_config(&config.gemini))
            .with(BuildDefaultCredential::new())
    }

    /// Append a provider at the lowest precedence.
    pub fn with(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Put an explicit key ahead of every other source.
    pub fn with_explicit(mut self, key: ApiKey) -> Self {
        self.providers.insert(0, Box::new(StaticCredential::new(key)));
        self
    }

    /// Source labels in lookup order.
    pub fn sources(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.source_name()).collect()
    }

    /// The first key found and the label of the source it came from.
    pub fn resolve_with_source(&self) -> Option<(ApiKey, &'static str)> {
        for provider in &self.providers {
            if let Some(key) = provider.resolve() {
                debug!(source = provider.source_name(), "Resolved API key");
                return Some((key, provider.source_name()));
            }
            debug!(source = provider.source_name(), "No API key from source");
        }
        debug!(sources = self.providers.len(), "No API key found in any source");
        None
    }
}

impl CredentialProvider for CredentialChain {
    fn resolve(&self) -> Option<ApiKey> {
        self.resolve_with_source().map(|(key, _)| key)
    }

    fn source_name(&self) -> &'static str {
        "chain"
    }
}
