//! Generation request type.

use crate::GenerationKind;
use serde::{Deserialize, Serialize};

/// A single generation request: task kind, topic, and optional details.
///
/// Details are only used by Shape Up pitches.
///
/// # Examples
///
/// ```
/// use backlog_core::{GenerationKind, GenerationRequest};
///
/// let request = GenerationRequest::builder()
///     .kind(GenerationKind::ShapeUpPitch)
///     .topic("Offline mode")
///     .details("Field teams lose signal often")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.topic(), "Offline mode");
/// assert_eq!(request.details().as_deref(), Some("Field teams lose signal often"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// What to generate
    kind: GenerationKind,
    /// Free-form topic text
    topic: String,
    /// Supplementary detail text
    #[builder(default, setter(into, strip_option))]
    details: Option<String>,
}

impl GenerationRequest {
    /// Create a builder.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// PRD request for a topic.
    pub fn prd(topic: impl Into<String>) -> Self {
        Self {
            kind: GenerationKind::Prd,
            topic: topic.into(),
            details: None,
        }
    }

    /// Strategic narrative request for a topic.
    pub fn narrative(topic: impl Into<String>) -> Self {
        Self {
            kind: GenerationKind::Narrative,
            topic: topic.into(),
            details: None,
        }
    }

    /// Shape Up pitch request for a topic with optional details.
    pub fn shape_up(topic: impl Into<String>, details: Option<impl Into<String>>) -> Self {
        Self {
            kind: GenerationKind::ShapeUpPitch,
            topic: topic.into(),
            details: details.map(Into::into),
        }
    }

    /// Whether the topic carries any non-whitespace text.
    pub fn has_topic(&self) -> bool {
        !self.topic.trim().is_empty()
    }
}
