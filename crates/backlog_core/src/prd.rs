//! Product requirements record.

use serde::{Deserialize, Serialize};

/// Keys the model must return for a PRD, in prompt order.
pub const PRD_FIELDS: [&str; 4] = ["title", "product_objective", "business_goal", "user_impact"];

/// Structured PRD section returned by the model.
///
/// All four fields are required. Values are kept exactly as the model
/// returned them.
///
/// # Examples
///
/// ```
/// use backlog_core::PrdSection;
///
/// let json = r#"{"title":"A","product_objective":"B","business_goal":"C","user_impact":"D"}"#;
/// let prd: PrdSection = serde_json::from_str(json).unwrap();
/// assert_eq!(prd.title, "A");
/// assert_eq!(prd.user_impact, "D");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrdSection {
    /// Short feature title
    pub title: String,
    /// What the product change sets out to achieve
    pub product_objective: String,
    /// Business outcome the change supports
    pub business_goal: String,
    /// Effect on end users
    pub user_impact: String,
}
