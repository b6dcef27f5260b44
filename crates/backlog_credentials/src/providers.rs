//! Individual credential lookup strategies.

use backlog_core::{ApiKey, CredentialsConfig, GeminiConfig};
use backlog_interface::{CredentialProvider, CredentialStore};
use tracing::warn;

/// Name of the compile-time variable holding the bundled default key.
pub const BUILD_DEFAULT_VAR: &str = "BACKLOG_GEMINI_API_KEY";

/// A key handed over directly by the caller.
#[derive(Debug, Clone)]
pub struct StaticCredential {
    key: Option<ApiKey>,
}

impl StaticCredential {
    /// Wrap an explicit key.
    pub fn new(key: ApiKey) -> Self {
        Self { key: Some(key) }
    }

    /// Wrap a raw value; blank values resolve to nothing.
    pub fn from_value(value: impl Into<String>) -> Self {
        Self {
            key: ApiKey::new(value),
        }
    }
}

impl CredentialProvider for StaticCredential {
    fn resolve(&self) -> Option<ApiKey> {
        self.key.clone()
    }

    fn source_name(&self) -> &'static str {
        "explicit"
    }
}

/// A key persisted in a [`CredentialStore`] under a fixed storage key.
///
/// A store that cannot be read is treated as holding no key.
#[derive(Debug, Clone)]
pub struct StoredCredential<S> {
    store: S,
    storage_key: String,
}

impl<S: CredentialStore> StoredCredential<S> {
    /// Read `storage_key` from `store`.
    pub fn new(store: S, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
        }
    }

    /// Use the storage key from configuration.
    pub fn from_config(store: S, config: &CredentialsConfig) -> Self {
        Self::new(store, config.storage_key.clone())
    }
}

impl<S: CredentialStore> CredentialProvider for StoredCredential<S> {
    fn resolve(&self) -> Option<ApiKey> {
        match self.store.load(&self.storage_key) {
            Ok(value) => value.and_then(ApiKey::new),
            Err(e) => {
                warn!(
                    storage_key = %self.storage_key,
                    error = %e,
                    "Credential store unreadable, skipping"
                );
                None
            }
        }
    }

    fn source_name(&self) -> &'static str {
        "stored"
    }
}

/// A key read from an environment variable at call time.
#[derive(Debug, Clone)]
pub struct EnvironmentCredential {
    var: String,
}

impl EnvironmentCredential {
    /// Read the named variable.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Use the variable named in configuration.
    pub fn from_config(config: &GeminiConfig) -> Self {
        Self::new(config.api_key_env.clone())
    }

    /// The variable this strategy reads.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl CredentialProvider for EnvironmentCredential {
    fn resolve(&self) -> Option<ApiKey> {
        std::env::var(&self.var).ok().and_then(ApiKey::new)
    }

    fn source_name(&self) -> &'static str {
        "environment"
    }
}

/// A default key compiled into the binary from `BACKLOG_GEMINI_API_KEY`.
#[derive(Debug, Clone, Copy)]
pub struct BuildDefaultCredential {
    value: Option<&'static str>,
}

impl BuildDefaultCredential {
    /// Use whatever was set at build time (possibly nothing).
    pub fn new() -> Self {
        Self {
            value: option_env!("BACKLOG_GEMINI_API_KEY"),
        }
    }

    /// Use a fixed value instead of the build-time one.
    pub fn with_value(value: Option<&'static str>) -> Self {
        Self { value }
    }
}

impl Default for BuildDefaultCredential {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialProvider for BuildDefaultCredential {
    fn resolve(&self) -> Option<ApiKey> {
        self.value.and_then(ApiKey::new)
    }

    fn source_name(&self) -> &'static str {
        "build-default"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryCredentialStore;

    #[test]
    fn test_static_blank_value_resolves_nothing() {
        assert!(StaticCredential::from_value("").resolve().is_none());
        assert!(StaticCredential::from_value("k").resolve().is_some());
    }

    #[test]
    fn test_stored_reads_configured_key() {
        let store = MemoryCredentialStore::new();
        store.save("custom_key", "abc").unwrap();
        let provider = StoredCredential::new(store, "custom_key");
        assert_eq!(provider.resolve().unwrap().expose(), "abc");
    }

    #[test]
    fn test_stored_blank_value_is_skipped() {
        let store = MemoryCredentialStore::new();
        store.save("gemini_api_key", "   ").unwrap();
        let provider = StoredCredential::new(store, "gemini_api_key");
        assert!(provider.resolve().is_none());
    }

    #[test]
    fn test_environment_unset_var() {
        let provider = EnvironmentCredential::new("BACKLOG_TEST_VAR_THAT_IS_NEVER_SET");
        assert!(provider.resolve().is_none());
    }

    #[test]
    fn test_environment_set_var() {
        // Cargo sets this for every test process.
        let provider = EnvironmentCredential::new("CARGO_PKG_NAME");
        assert_eq!(
            provider.resolve().unwrap().expose(),
            "backlog_credentials"
        );
    }

    #[test]
    fn test_build_default_override() {
        assert!(BuildDefaultCredential::with_value(None).resolve().is_none());
        assert_eq!(
            BuildDefaultCredential::with_value(Some("baked"))
                .resolve()
                .unwrap()
                .expose(),
            "baked"
        );
    }
}
