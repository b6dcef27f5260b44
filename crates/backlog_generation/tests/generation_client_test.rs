// Tests for GenerationClient using MockGenerator.
//
// No test here talks to a real model.

mod test_utils;

use backlog_core::{GenerationOutput, GenerationRequest, PrdSection};
use backlog_error::GenerationErrorKind;
use backlog_generation::{GenerationClient, NARRATIVE_SECTIONS, SHAPE_UP_SECTIONS};
use test_utils::{MockGenerator, PRD_JSON, no_credentials, test_credentials};

fn remote_error(message: &str) -> GenerationErrorKind {
    GenerationErrorKind::RemoteGeneration {
        status_code: None,
        message: message.to_string(),
    }
}

#[tokio::test]
async fn test_generate_prd_returns_exact_record() -> anyhow::Result<()> {
    let mock = MockGenerator::new_success(PRD_JSON);
    let client = GenerationClient::new(test_credentials(), mock.clone());

    let prd = client.generate_prd("Capacity planner").await?;

    assert_eq!(
        prd,
        PrdSection {
            title: "A".to_string(),
            product_objective: "B".to_string(),
            business_goal: "C".to_string(),
            user_impact: "D".to_string(),
        }
    );
    assert_eq!(mock.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_generate_prd_tolerates_fences() -> anyhow::Result<()> {
    let fenced = format!("```json\n{PRD_JSON}\n```");
    let client = GenerationClient::new(test_credentials(), MockGenerator::new_success(fenced));
    let plain = GenerationClient::new(test_credentials(), MockGenerator::new_success(PRD_JSON));

    assert_eq!(
        client.generate_prd("Capacity planner").await?,
        plain.generate_prd("Capacity planner").await?
    );
    Ok(())
}

#[tokio::test]
async fn test_generate_prd_missing_key_is_malformed() {
    let reply = r#"{"title":"A","product_objective":"B","business_goal":"C"}"#;
    let mock = MockGenerator::new_success(reply);
    let client = GenerationClient::new(test_credentials(), mock.clone());

    let err = client.generate_prd("Capacity planner").await.unwrap_err();

    assert!(matches!(err.kind, GenerationErrorKind::MalformedResponse(_)));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_missing_credential_never_dispatches() {
    let mock = MockGenerator::new_success(PRD_JSON);
    let client = GenerationClient::new(no_credentials(), mock.clone());

    let prd = client.generate_prd("Capacity planner").await.unwrap_err();
    let narrative = client.generate_narrative("Platform bet").await.unwrap_err();
    let pitch = client
        .shape_up_initiative("Bulk edit", Some("Leads only"))
        .await
        .unwrap_err();

    for err in [prd, narrative, pitch] {
        assert_eq!(err.kind, GenerationErrorKind::MissingCredential);
    }
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_remote_error_carries_message() {
    let mock = MockGenerator::new_error(remote_error("quota exceeded for project"));
    let client = GenerationClient::new(test_credentials(), mock.clone());

    let results = [
        client.generate_prd("A").await.map(|_| ()),
        client.generate_narrative("B").await.map(|_| ()),
        client.shape_up_initiative("C", None).await.map(|_| ()),
    ];

    for result in results {
        match result.unwrap_err().kind {
            GenerationErrorKind::RemoteGeneration { message, .. } => {
                assert_eq!(message, "quota exceeded for project");
            }
            other => panic!("Expected remote error, got {:?}", other),
        }
    }
    // One attempt per call, no retries.
    assert_eq!(mock.call_count(), 3);
}

#[tokio::test]
async fn test_remote_error_keeps_status_code() {
    let mock = MockGenerator::new_error(GenerationErrorKind::RemoteGeneration {
        status_code: Some(401),
        message: "API key not valid".to_string(),
    });
    let client = GenerationClient::new(test_credentials(), mock);

    let err = client.generate_narrative("Platform bet").await.unwrap_err();

    assert!(matches!(
        err.kind,
        GenerationErrorKind::RemoteGeneration {
            status_code: Some(401),
            ..
        }
    ));
}

#[tokio::test]
async fn test_narrative_returns_raw_text() -> anyhow::Result<()> {
    let reply = "```markdown\n## Old Game vs New Game\n...\n```";
    let mock = MockGenerator::new_success(reply);
    let client = GenerationClient::new(test_credentials(), mock.clone());

    let text = client.generate_narrative("Usage-based pricing").await?;

    assert_eq!(text, reply);
    Ok(())
}

#[tokio::test]
async fn test_narrative_prompt_has_topic_and_sections() -> anyhow::Result<()> {
    let mock = MockGenerator::new_success("ok");
    let client = GenerationClient::new(test_credentials(), mock.clone());
    let topic = "Move squads from projects to outcomes";

    client.generate_narrative(topic).await?;

    let prompt = mock.last_prompt().unwrap();
    assert!(prompt.contains(topic));
    let positions: Vec<usize> = NARRATIVE_SECTIONS
        .iter()
        .map(|section| prompt.find(section).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    Ok(())
}

#[tokio::test]
async fn test_shape_up_prompt_with_details() -> anyhow::Result<()> {
    let mock = MockGenerator::new_success("pitch");
    let client = GenerationClient::new(test_credentials(), mock.clone());

    let text = client
        .shape_up_initiative("Recurring tasks", Some("Weekly and monthly only"))
        .await?;

    assert_eq!(text, "pitch");
    let prompt = mock.last_prompt().unwrap();
    assert!(prompt.contains("Recurring tasks"));
    assert!(prompt.contains("Weekly and monthly only"));
    assert!(prompt.contains("Additional Details"));
    Ok(())
}

#[tokio::test]
async fn test_shape_up_prompt_without_details() -> anyhow::Result<()> {
    let mock = MockGenerator::new_success("pitch");
    let client = GenerationClient::new(test_credentials(), mock.clone());

    client.shape_up_initiative("Recurring tasks", None).await?;

    let prompt = mock.last_prompt().unwrap();
    assert!(prompt.contains("Recurring tasks"));
    assert!(!prompt.contains("Additional Details"));
    let positions: Vec<usize> = SHAPE_UP_SECTIONS
        .iter()
        .map(|section| prompt.find(&format!("## {section}")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    Ok(())
}

#[tokio::test]
async fn test_empty_topic_is_rejected_before_dispatch() {
    let mock = MockGenerator::new_success(PRD_JSON);
    let client = GenerationClient::new(test_credentials(), mock.clone());

    let err = client.generate_prd("   ").await.unwrap_err();

    assert_eq!(err.kind, GenerationErrorKind::EmptyTopic);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_empty_topic_checked_before_credentials() {
    let client = GenerationClient::new(no_credentials(), MockGenerator::new_success("x"));

    let err = client.generate_narrative("").await.unwrap_err();

    assert_eq!(err.kind, GenerationErrorKind::EmptyTopic);
}

#[tokio::test]
async fn test_resolved_key_is_forwarded() -> anyhow::Result<()> {
    let mock = MockGenerator::new_success("ok");
    let client = GenerationClient::new(test_credentials(), mock.clone());

    client.generate_narrative("Anything").await?;

    assert_eq!(mock.last_key().as_deref(), Some("test-key"));
    Ok(())
}

#[tokio::test]
async fn test_generate_dispatches_by_kind() -> anyhow::Result<()> {
    let prd_client = GenerationClient::new(test_credentials(), MockGenerator::new_success(PRD_JSON));
    let text_client = GenerationClient::new(test_credentials(), MockGenerator::new_success("# Pitch"));

    let prd = prd_client.generate(&GenerationRequest::prd("X")).await?;
    let pitch = text_client
        .generate(&GenerationRequest::shape_up("Y", None::<String>))
        .await?;

    assert_eq!(prd.as_prd().map(|p| p.title.as_str()), Some("A"));
    assert_eq!(pitch, GenerationOutput::Markdown("# Pitch".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() -> anyhow::Result<()> {
    let mock = MockGenerator::new_success("ok");
    let client = GenerationClient::new(test_credentials(), mock.clone());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move { client.generate_narrative(&format!("Topic {i}")).await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await??, "ok");
    }
    assert_eq!(mock.call_count(), 8);
    Ok(())
}
