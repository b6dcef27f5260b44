//! The generation client.

use crate::{build_prompt, parse_prd};
use backlog_core::{GenerationKind, GenerationOutput, GenerationRequest, PrdSection};
use backlog_error::{GenerationError, GenerationErrorKind, GenerationResult};
use backlog_interface::{CredentialProvider, TextGenerator};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Drafts PRDs, narratives and Shape Up pitches through an injected
/// transport, using an injected credential provider.
///
/// Every call is independent. The client holds no mutable state, so it can
/// be cloned and shared freely across tasks.
///
/// # Example
///
/// ```no_run
/// use backlog_core::BacklogConfig;
/// use backlog_credentials::{CredentialChain, FileCredentialStore};
/// use backlog_generation::GenerationClient;
/// use backlog_models::GeminiGenerator;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = BacklogConfig::load()?;
/// let store = FileCredentialStore::from_config(&config.credentials)?;
/// let client = GenerationClient::new(
///     CredentialChain::standard(store, &config),
///     GeminiGenerator::from_config(&config.gemini),
/// );
///
/// let prd = client.generate_prd("Squad capacity dashboard").await?;
/// println!("{}", prd.title);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GenerationClient {
    credentials: Arc<dyn CredentialProvider>,
    generator: Arc<dyn TextGenerator>,
}

impl std::fmt::Debug for GenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationClient")
            .field("credentials", &self.credentials.source_name())
            .field("provider", &self.generator.provider_name())
            .field("model", &self.generator.model_name())
            .finish()
    }
}

impl GenerationClient {
    /// Assemble a client from a credential provider and a transport.
    pub fn new(
        credentials: impl CredentialProvider + 'static,
        generator: impl TextGenerator + 'static,
    ) -> Self {
        Self {
            credentials: Arc::new(credentials),
            generator: Arc::new(generator),
        }
    }

    /// Assemble a client from already shared parts.
    pub fn from_shared(
        credentials: Arc<dyn CredentialProvider>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            credentials,
            generator,
        }
    }

    /// Draft a structured PRD section for a topic.
    ///
    /// # Errors
    ///
    /// - `EmptyTopic` if the topic is blank
    /// - `MissingCredential` if no API key resolves (nothing is sent)
    /// - `RemoteGeneration` if the model call fails
    /// - `MalformedResponse` if the reply lacks any of the four fields
    #[instrument(skip(self, topic), fields(topic_len = topic.len()))]
    pub async fn generate_prd(&self, topic: &str) -> GenerationResult<PrdSection> {
        let raw = self.invoke(&GenerationRequest::prd(topic)).await?;
        parse_prd(&raw)
    }

    /// Draft a strategic narrative in Markdown.
    ///
    /// # Errors
    ///
    /// `EmptyTopic`, `MissingCredential` or `RemoteGeneration`.
    #[instrument(skip(self, topic), fields(topic_len = topic.len()))]
    pub async fn generate_narrative(&self, topic: &str) -> GenerationResult<String> {
        self.invoke(&GenerationRequest::narrative(topic)).await
    }

    /// Draft a Shape Up pitch in Markdown, with optional extra details.
    ///
    /// # Errors
    ///
    /// `EmptyTopic`, `MissingCredential` or `RemoteGeneration`.
    #[instrument(skip(self, topic, details), fields(topic_len = topic.len(), has_details = details.is_some()))]
    pub async fn shape_up_initiative(
        &self,
        topic: &str,
        details: Option<&str>,
    ) -> GenerationResult<String> {
        self.invoke(&GenerationRequest::shape_up(topic, details)).await
    }

    /// Run any request, returning the output shape its kind implies.
    #[instrument(skip(self, request), fields(kind = %request.kind()))]
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult<GenerationOutput> {
        let raw = self.invoke(request).await?;
        match request.kind() {
            GenerationKind::Prd => parse_prd(&raw).map(GenerationOutput::Prd),
            GenerationKind::Narrative | GenerationKind::ShapeUpPitch => {
                Ok(GenerationOutput::Markdown(raw))
            }
        }
    }

    /// Validate, resolve the key, build the prompt and send it once.
    async fn invoke(&self, request: &GenerationRequest) -> GenerationResult<String> {
        if !request.has_topic() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyTopic));
        }

        let key = self
            .credentials
            .resolve()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingCredential))?;

        let prompt = build_prompt(request);

        debug!(
            kind = %request.kind(),
            provider = self.generator.provider_name(),
            model = self.generator.model_name(),
            prompt_len = prompt.len(),
            "Dispatching generation request"
        );

        let text = self.generator.generate_text(&key, &prompt).await?;

        debug!(response_len = text.len(), "Generation request completed");
        Ok(text)
    }
}
