//! API key management handlers.

use super::{commands::KeyCommands, generate::credential_chain};
use backlog::{
    ApiKey, BacklogConfig, BacklogResult, ConfigError, CredentialStore, FileCredentialStore,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument};

/// Where the next generation call would get its API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStatus {
    /// Label of the winning source, if any source has a key
    pub source: Option<&'static str>,
    /// Location of the saved key file
    pub store_path: PathBuf,
}

/// Handle API key commands.
#[instrument(skip_all)]
pub fn handle_key_command(
    cmd: &KeyCommands,
    config: &BacklogConfig,
    api_key: Option<&str>,
) -> BacklogResult<()> {
    let store = Arc::new(FileCredentialStore::from_config(&config.credentials)?);
    let storage_key = &config.credentials.storage_key;

    match cmd {
        KeyCommands::Set { value } => {
            save_key(store.as_ref(), storage_key, value)?;
            info!(path = %store.path().display(), "Saved API key");
            println!("Saved API key to {}", store.path().display());
        }

        KeyCommands::Clear => {
            if store.remove(storage_key)? {
                println!("Removed saved API key from {}", store.path().display());
            } else {
                println!("No saved API key in {}", store.path().display());
            }
        }

        KeyCommands::Status => {
            let status = key_status(store, config, api_key);
            match status.source {
                Some(source) => println!("API key: available (source: {})", source),
                None => println!("API key: not configured"),
            }
            println!("Key store: {}", status.store_path.display());
        }
    }

    Ok(())
}

/// Save a user-entered key, rejecting blank input.
pub fn save_key(store: &impl CredentialStore, storage_key: &str, value: &str) -> BacklogResult<()> {
    let key = ApiKey::new(value).ok_or_else(|| ConfigError::new("API key must not be empty"))?;
    store.save(storage_key, key.expose())
}

/// Resolve the key without using it, reporting only where it came from.
pub fn key_status(
    store: Arc<FileCredentialStore>,
    config: &BacklogConfig,
    api_key: Option<&str>,
) -> KeyStatus {
    let store_path = store.path().to_path_buf();
    let source = credential_chain(store, config, api_key)
        .resolve_with_source()
        .map(|(_, source)| source);

    KeyStatus { source, store_path }
}
