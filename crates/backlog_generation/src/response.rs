//! Cleaning and parsing model replies.
//!
//! Models sometimes wrap JSON in Markdown code fences even when told not to.
//! [`sanitize_response`] removes the wrappings we know about before the
//! strict parse in [`parse_prd`]. It is best effort: a reply it cannot make
//! sense of is passed on for the parser to reject.

use backlog_core::{PRD_FIELDS, PrdSection};
use backlog_error::{GenerationError, GenerationResult};
use tracing::{debug, error};

const FENCE: &str = "```";

/// Strip Markdown code fences from a model reply.
///
/// Text that is already valid JSON is only trimmed, even when a string value
/// contains a fence. Otherwise the first fence at the start of a line opens
/// the block. It is closed by the first later fence that ends a complete
/// JSON value, or else by the last fence. Handles
/// `` ```json `` (any info string), bare fences, surrounding whitespace or
/// prose, and an opening fence with no closing fence (a truncated reply).
/// Applying it twice gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use backlog_generation::sanitize_response;
///
/// assert_eq!(sanitize_response("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
/// assert_eq!(sanitize_response("  {\"a\": 1}  "), "{\"a\": 1}");
/// assert_eq!(sanitize_response("{\"a\": \"```\"}"), "{\"a\": \"```\"}");
/// ```
pub fn sanitize_response(raw: &str) -> &str {
    let trimmed = raw.trim();
    if is_json(trimmed) {
        return trimmed;
    }

    let Some(open) = opening_fence(trimmed) else {
        return trimmed;
    };

    let after_fence = &trimmed[open + FENCE.len()..];
    let body = skip_info_string(after_fence);

    // The closing fence is the first one that ends a complete JSON value,
    // so fences inside string values or trailing prose are skipped.
    let inner = body
        .match_indices(FENCE)
        .map(|(close, _)| &body[..close])
        .find(|candidate| is_json(candidate))
        .or_else(|| is_json(body).then_some(body))
        .unwrap_or_else(|| match body.rfind(FENCE) {
            Some(close) => &body[..close],
            None => {
                debug!("Opening code fence without closing fence, using remainder");
                body
            }
        });

    inner.trim()
}

fn is_json(text: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(text).is_ok()
}

/// Byte offset of the first fence that starts a line, ignoring indentation.
fn opening_fence(text: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        if line[indent..].starts_with(FENCE) {
            return Some(offset + indent);
        }
        offset += line.len();
    }
    None
}

/// Skip a fence info string such as `json` when it is followed by a line
/// break, whitespace, or the start of the payload.
fn skip_info_string(after_fence: &str) -> &str {
    let tag_len = after_fence
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+')))
        .unwrap_or(after_fence.len());

    let rest = &after_fence[tag_len..];
    match rest.chars().next() {
        None => rest,
        Some(c) if c.is_whitespace() || c == '{' || c == '[' => rest,
        Some(_) => after_fence,
    }
}

/// Parse a PRD reply into a [`PrdSection`].
///
/// The reply is sanitized first, then parsed strictly. All four keys must
/// be present with string values; extra keys are ignored. Field values are
/// returned exactly as parsed.
///
/// # Errors
///
/// `MalformedResponse` if the cleaned text is not JSON, not an object, is
/// missing a required key, or holds a non-string value for one.
///
/// # Examples
///
/// ```
/// use backlog_generation::parse_prd;
///
/// let prd = parse_prd(
///     r#"{"title":"A","product_objective":"B","business_goal":"C","user_impact":"D"}"#,
/// )
/// .unwrap();
/// assert_eq!(prd.business_goal, "C");
/// ```
pub fn parse_prd(raw: &str) -> GenerationResult<PrdSection> {
    let cleaned = sanitize_response(raw);

    let value: serde_json::Value = serde_json::from_str(cleaned).map_err(|e| {
        let preview = cleaned.chars().take(100).collect::<String>();
        error!(
            error = %e,
            response_preview = %preview,
            "PRD response is not valid JSON"
        );
        GenerationError::malformed(format!("response is not valid JSON: {}", e))
    })?;

    let object = value
        .as_object()
        .ok_or_else(|| GenerationError::malformed("expected a JSON object"))?;

    let missing = PRD_FIELDS
        .iter()
        .filter(|field| !object.contains_key(**field))
        .copied()
        .collect::<Vec<_>>();

    if !missing.is_empty() {
        error!(missing = ?missing, "PRD response is missing required keys");
        return Err(GenerationError::malformed(format!(
            "missing required keys: {}",
            missing.join(", ")
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| GenerationError::malformed(format!("invalid PRD field value: {}", e)))
}
