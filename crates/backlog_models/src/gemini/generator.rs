//! Gemini implementation of [`TextGenerator`].

use async_trait::async_trait;
use gemini_rust::{Gemini, client::Model};
use tracing::{debug, instrument, warn};

use backlog_core::{ApiKey, GeminiConfig};
use backlog_error::{GenerationError, GenerationErrorKind, GenerationResult};
use backlog_interface::TextGenerator;

/// Single-shot Gemini text generation.
///
/// # Example
///
/// ```
/// use backlog_core::GeminiConfig;
/// use backlog_interface::TextGenerator;
/// use backlog_models::GeminiGenerator;
///
/// let generator = GeminiGenerator::from_config(&GeminiConfig::default());
/// assert_eq!(generator.provider_name(), "gemini");
/// assert_eq!(generator.model_name(), "gemini-2.5-flash");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiGenerator {
    model_name: String,
}

impl GeminiGenerator {
    /// Generator for the named model.
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
        }
    }

    /// Generator for the configured model.
    pub fn from_config(config: &GeminiConfig) -> Self {
        Self::new(config.model.clone())
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Unrecognized names become `Model::Custom`, with the "models/" prefix
    /// the API requires added when missing.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other if other.starts_with("models/") => Model::Custom(other.to_string()),
            other => Model::Custom(format!("models/{}", other)),
        }
    }

    /// Map a gemini-rust error to a remote generation failure.
    ///
    /// Keeps the full message and pulls out the HTTP status when the message
    /// carries one (e.g. "bad response from server; code 429; description: ...").
    fn parse_gemini_error(err: impl std::fmt::Display) -> GenerationError {
        let message = err.to_string();
        let status_code = Self::extract_status_code(&message);
        GenerationError::new(GenerationErrorKind::RemoteGeneration {
            status_code,
            message,
        })
    }

    fn extract_status_code(error_msg: &str) -> Option<u16> {
        let code_start = error_msg.find("code ")?;
        let code_str = &error_msg[code_start + 5..];
        let end = code_str
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(code_str.len());
        code_str[..end].parse().ok()
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    #[instrument(skip(self, key, prompt), fields(model = %self.model_name, prompt_len = prompt.len()))]
    async fn generate_text(&self, key: &ApiKey, prompt: &str) -> GenerationResult<String> {
        let client = Gemini::with_model(key.expose(), Self::model_name_to_enum(&self.model_name))
            .map_err(|e| {
                GenerationError::remote(format!("Failed to create Gemini client: {}", e))
            })?;

        debug!("Sending Gemini generateContent request");

        let response = client
            .generate_content()
            .with_user_message(prompt)
            .execute()
            .await
            .map_err(|e| {
                let err = Self::parse_gemini_error(e);
                warn!(error = %err.kind, "Gemini request failed");
                err
            })?;

        let text = response.text();
        debug!(response_len = text.len(), "Received Gemini response");

        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
