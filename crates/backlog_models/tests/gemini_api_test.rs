#![cfg(all(feature = "gemini", feature = "api"))]

// Live Gemini calls. Run with `--features api` and GEMINI_API_KEY set.

use backlog_core::ApiKey;
use backlog_error::GenerationErrorKind;
use backlog_interface::TextGenerator;
use backlog_models::GeminiGenerator;

#[tokio::test]
async fn test_gemini_generates_text() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let key = ApiKey::new(std::env::var("GEMINI_API_KEY")?).expect("GEMINI_API_KEY is blank");
    let generator = GeminiGenerator::new("gemini-2.5-flash-lite");

    let text = generator
        .generate_text(&key, "Reply with the single word: pong")
        .await?;

    assert!(!text.trim().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_gemini_rejects_bad_key() {
    let key = ApiKey::new("definitely-not-a-valid-key").unwrap();
    let generator = GeminiGenerator::new("gemini-2.5-flash-lite");

    let err = generator.generate_text(&key, "ping").await.unwrap_err();

    assert!(matches!(
        err.kind,
        GenerationErrorKind::RemoteGeneration { .. }
    ));
}
