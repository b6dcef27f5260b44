//! Mock transport for testing.

use async_trait::async_trait;
use backlog_core::ApiKey;
use backlog_error::{GenerationError, GenerationErrorKind, GenerationResult};
use backlog_interface::TextGenerator;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(GenerationErrorKind),
}

/// Mock transport that records what it was asked.
///
/// Clones share the same call log, so a test can hand one clone to the
/// client and inspect another.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockGenerator {
    /// Create a mock that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Success(text.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that always fails with the given error.
    pub fn new_error(error: GenerationErrorKind) -> Self {
        Self {
            behavior: MockBehavior::Error(error),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times `generate_text` was called.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Prompt of the most recent call.
    #[allow(dead_code)]
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|(_, prompt)| prompt.clone())
    }

    /// Key of the most recent call.
    #[allow(dead_code)]
    pub fn last_key(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|(key, _)| key.clone())
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate_text(&self, key: &ApiKey, prompt: &str) -> GenerationResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((key.expose().to_string(), prompt.to_string()));

        match &self.behavior {
            MockBehavior::Success(text) => Ok(text.clone()),
            MockBehavior::Error(kind) => Err(GenerationError::new(kind.clone())),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
