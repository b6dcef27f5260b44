//! Generation results.

use crate::PrdSection;
use serde::{Deserialize, Serialize};

/// Result of a successful generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(tag = "type", content = "data")]
pub enum GenerationOutput {
    /// Parsed PRD record
    Prd(PrdSection),
    /// Markdown prose, returned as the model produced it
    Markdown(String),
}

impl GenerationOutput {
    /// The PRD record, if this is one.
    pub fn as_prd(&self) -> Option<&PrdSection> {
        match self {
            GenerationOutput::Prd(prd) => Some(prd),
            GenerationOutput::Markdown(_) => None,
        }
    }

    /// The Markdown text, if this is prose.
    pub fn as_markdown(&self) -> Option<&str> {
        match self {
            GenerationOutput::Markdown(text) => Some(text),
            GenerationOutput::Prd(_) => None,
        }
    }
}
