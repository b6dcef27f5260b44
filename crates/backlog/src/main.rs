//! Backlog CLI binary.
//!
//! This binary provides command-line access to Backlog's generators:
//! - Draft a PRD section as JSON
//! - Draft a strategic narrative or Shape Up pitch as Markdown
//! - Manage the saved Gemini API key

use backlog::{BacklogConfig, GenerationRequest};
use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, build_client, handle_key_command, run_generation};

    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    init_logging(&cli)?;

    let mut config = BacklogConfig::load_with_override(cli.config.as_deref())?;
    if let Some(model) = &cli.model {
        config.gemini.model = model.clone();
    }

    // Execute the requested command
    let request = match &cli.command {
        Commands::Prd { topic } => GenerationRequest::prd(topic.join(" ")),
        Commands::Narrative { topic } => GenerationRequest::narrative(topic.join(" ")),
        Commands::ShapeUp { topic, details } => {
            GenerationRequest::shape_up(topic.join(" "), details.clone())
        }
        Commands::Key(key_cmd) => {
            handle_key_command(key_cmd, &config, cli.api_key.as_deref())?;
            return Ok(());
        }
    };

    let client = build_client(&config, cli.api_key.as_deref());
    run_generation(&client, &request).await?;

    Ok(())
}

#[cfg(not(feature = "observability"))]
fn init_logging(cli: &cli::Cli) -> Result<(), Box<dyn std::error::Error>> {
    use backlog::{TracingConfig, init_tracing};

    init_tracing(&TracingConfig::new(log_level(cli)).with_json_logs(cli.json_logs))
}

#[cfg(feature = "observability")]
fn init_logging(cli: &cli::Cli) -> Result<(), Box<dyn std::error::Error>> {
    use backlog::observability::{ObservabilityConfig, init_observability};

    init_observability(
        &ObservabilityConfig::default()
            .with_log_level(log_level(cli))
            .with_json_logs(cli.json_logs),
    )
}

fn log_level(cli: &cli::Cli) -> &'static str {
    if cli.verbose { "debug" } else { "info" }
}
