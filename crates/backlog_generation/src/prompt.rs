//! Prompt templates for each generation kind.

use backlog_core::{GenerationKind, GenerationRequest, PRD_FIELDS};

/// Narrative section headers, in the order the model must emit them.
pub const NARRATIVE_SECTIONS: [&str; 5] = [
    "Old Game vs New Game",
    "Undeniable Change",
    "Promised Land",
    "Magic Gifts",
    "Evidence",
];

const NARRATIVE_GUIDANCE: [&str; 5] = [
    "Describe how customers win today and why that way of winning is ending.",
    "Name the shift in the world that makes the old game unwinnable.",
    "Paint the future state customers reach once they adapt.",
    "Explain the capabilities this initiative gives customers to get there.",
    "Show proof that the promised land is real: data, early results, quotes.",
];

/// Shape Up pitch section headers, in the order the model must emit them.
pub const SHAPE_UP_SECTIONS: [&str; 5] = [
    "Problem",
    "Appetite",
    "Solution",
    "Rabbit Holes",
    "No-Gos",
];

const SHAPE_UP_GUIDANCE: [&str; 5] = [
    "The raw idea, the use case, or what is broken today.",
    "How much time the team should spend: a small batch (1-2 weeks) or a big batch (6 weeks).",
    "The core elements of the solution, as fat-marker sketches in words.",
    "Details worth calling out to avoid known traps and unknowns.",
    "What is explicitly out of scope so the work fits the appetite.",
];

const DETAILS_LABEL: &str = "### Additional Details";

/// Build the model prompt for a request.
///
/// Pure and deterministic: the same request always gives the same prompt.
/// Topic and details are inserted verbatim.
///
/// # Examples
///
/// ```
/// use backlog_core::GenerationRequest;
/// use backlog_generation::build_prompt;
///
/// let prompt = build_prompt(&GenerationRequest::prd("Team capacity planner"));
/// assert!(prompt.contains("Team capacity planner"));
/// assert!(prompt.contains("\"product_objective\""));
/// ```
pub fn build_prompt(request: &GenerationRequest) -> String {
    match request.kind() {
        GenerationKind::Prd => prd_prompt(request.topic()),
        GenerationKind::Narrative => narrative_prompt(request.topic()),
        GenerationKind::ShapeUpPitch => {
            shape_up_prompt(request.topic(), request.details().as_deref())
        }
    }
}

fn prd_prompt(topic: &str) -> String {
    let keys = PRD_FIELDS
        .iter()
        .map(|field| format!("\"{}\"", field))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Act as an expert product manager. Write the core section of a product \
         requirements document (PRD) for the following feature idea:\n\
         \n\
         {topic}\n\
         \n\
         Return strictly a single JSON object with exactly these keys: {keys}. \
         Every value must be a plain string. \
         Do not wrap the JSON in Markdown code fences (```), \
         and do not add any text before or after the JSON object."
    )
}

fn narrative_prompt(topic: &str) -> String {
    format!(
        "Act as a strategic product leader. Write a strategic narrative for the \
         following initiative:\n\
         \n\
         {topic}\n\
         \n\
         Format the response as Markdown using exactly these section headers, \
         in this order:\n\
         \n\
         {sections}",
        sections = section_outline(&NARRATIVE_SECTIONS, &NARRATIVE_GUIDANCE),
    )
}

fn shape_up_prompt(topic: &str, details: Option<&str>) -> String {
    let mut context = topic.to_string();
    if let Some(details) = details.filter(|d| !d.trim().is_empty()) {
        context.push_str("\n\n");
        context.push_str(DETAILS_LABEL);
        context.push('\n');
        context.push_str(details);
    }

    format!(
        "Act as a product lead who shapes work using the Shape Up method. \
         Write a pitch for the following initiative:\n\
         \n\
         {context}\n\
         \n\
         Format the response as Markdown using exactly these section headers, \
         in this order:\n\
         \n\
         {sections}",
        sections = section_outline(&SHAPE_UP_SECTIONS, &SHAPE_UP_GUIDANCE),
    )
}

fn section_outline(headers: &[&str], guidance: &[&str]) -> String {
    headers
        .iter()
        .zip(guidance)
        .map(|(header, hint)| format!("## {header}\n{hint}\n"))
        .collect::<Vec<_>>()
        .join("\n")
}
