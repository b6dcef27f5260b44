//! Trait definitions for transports and credential sources.

use async_trait::async_trait;
use backlog_core::ApiKey;
use backlog_error::{BacklogResult, GenerationResult};
use std::sync::Arc;

/// Transport to a remote text-generation model.
///
/// One call to [`generate_text`](TextGenerator::generate_text) issues exactly
/// one outbound request. Implementations do not retry. Failures are reported
/// as `GenerationErrorKind::RemoteGeneration` carrying the underlying message.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt and return the model's raw text reply.
    async fn generate_text(&self, key: &ApiKey, prompt: &str) -> GenerationResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate_text(&self, key: &ApiKey, prompt: &str) -> GenerationResult<String> {
        (**self).generate_text(key, prompt).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// One strategy for finding an API key.
///
/// Providers only read. They never create, change, or cache a key.
pub trait CredentialProvider: Send + Sync {
    /// The key from this source, or `None` if it has none.
    fn resolve(&self) -> Option<ApiKey>;

    /// Short label used in logs (never the key itself).
    fn source_name(&self) -> &'static str;
}

impl<T: CredentialProvider + ?Sized> CredentialProvider for Arc<T> {
    fn resolve(&self) -> Option<ApiKey> {
        (**self).resolve()
    }

    fn source_name(&self) -> &'static str {
        (**self).source_name()
    }
}

impl<T: CredentialProvider + ?Sized> CredentialProvider for Box<T> {
    fn resolve(&self) -> Option<ApiKey> {
        (**self).resolve()
    }

    fn source_name(&self) -> &'static str {
        (**self).source_name()
    }
}

/// Local key-value storage for user-entered secrets.
pub trait CredentialStore: Send + Sync {
    /// Read the value stored under `key`.
    fn load(&self, key: &str) -> BacklogResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> BacklogResult<()>;

    /// Delete `key`. Returns whether a value was present.
    fn remove(&self, key: &str) -> BacklogResult<bool>;
}

impl<T: CredentialStore + ?Sized> CredentialStore for Arc<T> {
    fn load(&self, key: &str) -> BacklogResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> BacklogResult<()> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> BacklogResult<bool> {
        (**self).remove(key)
    }
}
