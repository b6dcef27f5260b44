//! Generation task kinds.

use serde::{Deserialize, Serialize};

/// The artefact a generation call produces.
///
/// # Examples
///
/// ```
/// use backlog_core::GenerationKind;
/// use std::str::FromStr;
///
/// assert_eq!(GenerationKind::Prd.to_string(), "PRD");
/// assert_eq!(GenerationKind::from_str("shape-up").unwrap(), GenerationKind::ShapeUpPitch);
/// assert_eq!(GenerationKind::from_str("narrative").unwrap(), GenerationKind::Narrative);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum GenerationKind {
    /// Structured product requirements record
    #[serde(rename = "PRD")]
    #[strum(to_string = "PRD")]
    Prd,
    /// Strategic narrative prose
    #[strum(to_string = "Narrative")]
    Narrative,
    /// Shape Up pitch prose
    #[strum(
        to_string = "ShapeUpPitch",
        serialize = "shape-up-pitch",
        serialize = "shape-up"
    )]
    ShapeUpPitch,
}

impl GenerationKind {
    /// Whether the reply is parsed into a structured record.
    pub fn is_structured(&self) -> bool {
        matches!(self, GenerationKind::Prd)
    }
}
