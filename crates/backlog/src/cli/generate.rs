//! Generation command handlers.

use backlog::{
    ApiKey, BacklogConfig, BacklogResult, CredentialChain, CredentialStore, FileCredentialStore,
    GeminiGenerator, GenerationClient, GenerationOutput, GenerationRequest,
};
use tracing::{instrument, warn};

/// Standard credential chain, with the `--api-key` value first when it is not blank.
pub fn credential_chain<S>(store: S, config: &BacklogConfig, api_key: Option<&str>) -> CredentialChain
where
    S: CredentialStore + 'static,
{
    with_explicit_key(CredentialChain::standard(store, config), api_key)
}

/// Like [`credential_chain`], but a store that cannot be opened only drops
/// the saved-key source.
pub fn chain_from_store<S>(
    store: BacklogResult<S>,
    config: &BacklogConfig,
    api_key: Option<&str>,
) -> CredentialChain
where
    S: CredentialStore + 'static,
{
    match store {
        Ok(store) => credential_chain(store, config, api_key),
        Err(e) => {
            warn!(error = %e, "Key store unavailable, skipping saved key");
            with_explicit_key(CredentialChain::without_store(config), api_key)
        }
    }
}

fn with_explicit_key(chain: CredentialChain, api_key: Option<&str>) -> CredentialChain {
    match api_key.and_then(ApiKey::new) {
        Some(key) => chain.with_explicit(key),
        None => chain,
    }
}

/// Build a Gemini-backed client from configuration.
pub fn build_client(config: &BacklogConfig, api_key: Option<&str>) -> GenerationClient {
    GenerationClient::new(
        chain_from_store(
            FileCredentialStore::from_config(&config.credentials),
            config,
            api_key,
        ),
        GeminiGenerator::from_config(&config.gemini),
    )
}

/// Run one request and print the result to stdout.
#[instrument(skip_all, fields(kind = %request.kind()))]
pub async fn run_generation(
    client: &GenerationClient,
    request: &GenerationRequest,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = client.generate(request).await?;
    println!("{}", render_output(&output)?);
    Ok(())
}

/// PRDs render as pretty JSON, everything else as the model wrote it.
pub fn render_output(output: &GenerationOutput) -> serde_json::Result<String> {
    match output {
        GenerationOutput::Prd(prd) => serde_json::to_string_pretty(prd),
        GenerationOutput::Markdown(text) => Ok(text.clone()),
    }
}
