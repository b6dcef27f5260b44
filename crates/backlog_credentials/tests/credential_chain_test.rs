//! Tests for ordered credential resolution.

use backlog_core::{ApiKey, BacklogConfig};
use backlog_credentials::{
    BuildDefaultCredential, CredentialChain, EnvironmentCredential, FileCredentialStore,
    MemoryCredentialStore, StoredCredential,
};
use backlog_interface::{CredentialProvider, CredentialStore};
use std::sync::Arc;
use tempfile::TempDir;

const UNSET_VAR: &str = "BACKLOG_CHAIN_TEST_VAR_THAT_IS_NEVER_SET";

fn chain_over(store: Arc<MemoryCredentialStore>, build_default: Option<&'static str>) -> CredentialChain {
    CredentialChain::new()
        .with(StoredCredential::new(store, "gemini_api_key"))
        .with(EnvironmentCredential::new(UNSET_VAR))
        .with(BuildDefaultCredential::with_value(build_default))
}

#[test]
fn test_empty_chain_resolves_nothing() {
    assert!(CredentialChain::new().resolve().is_none());
}

#[test]
fn test_nothing_anywhere_resolves_nothing() {
    let chain = chain_over(Arc::new(MemoryCredentialStore::new()), None);
    assert!(chain.resolve().is_none());
}

#[test]
fn test_stored_key_beats_build_default() -> anyhow::Result<()> {
    let store = Arc::new(MemoryCredentialStore::new());
    store.save("gemini_api_key", "stored")?;
    let chain = chain_over(store, Some("baked"));

    let (key, source) = chain.resolve_with_source().unwrap();

    assert_eq!(key.expose(), "stored");
    assert_eq!(source, "stored");
    Ok(())
}

#[test]
fn test_build_default_used_when_nothing_stored() {
    let chain = chain_over(Arc::new(MemoryCredentialStore::new()), Some("baked"));

    let (key, source) = chain.resolve_with_source().unwrap();

    assert_eq!(key.expose(), "baked");
    assert_eq!(source, "build-default");
}

#[test]
fn test_explicit_key_beats_everything() -> anyhow::Result<()> {
    let store = Arc::new(MemoryCredentialStore::new());
    store.save("gemini_api_key", "stored")?;
    let chain = chain_over(store, Some("baked")).with_explicit(ApiKey::new("typed").unwrap());

    assert_eq!(chain.resolve().unwrap().expose(), "typed");
    assert_eq!(chain.sources()[0], "explicit");
    Ok(())
}

#[test]
fn test_blank_stored_key_falls_through() -> anyhow::Result<()> {
    let store = Arc::new(MemoryCredentialStore::new());
    store.save("gemini_api_key", "")?;
    let chain = chain_over(store, Some("baked"));

    assert_eq!(chain.resolve().unwrap().expose(), "baked");
    Ok(())
}

#[test]
fn test_corrupt_store_falls_through() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("credentials.json");
    std::fs::write(&path, "[1, 2, 3]")?;

    let chain = CredentialChain::new()
        .with(StoredCredential::new(FileCredentialStore::new(&path), "gemini_api_key"))
        .with(BuildDefaultCredential::with_value(Some("baked")));

    assert_eq!(chain.resolve().unwrap().expose(), "baked");
    Ok(())
}

#[test]
fn test_resolution_does_not_mutate_store() -> anyhow::Result<()> {
    let store = Arc::new(MemoryCredentialStore::new());
    let chain = chain_over(store.clone(), Some("baked"));

    let _ = chain.resolve();

    assert_eq!(store.load("gemini_api_key")?, None);
    Ok(())
}

#[test]
fn test_standard_chain_order() {
    let chain = CredentialChain::standard(MemoryCredentialStore::new(), &BacklogConfig::default());
    assert_eq!(chain.sources(), vec!["stored", "environment", "build-default"]);
}

#[test]
fn test_without_store_skips_stored_source() {
    let chain = CredentialChain::without_store(&BacklogConfig::default());
    assert_eq!(chain.sources(), vec!["environment", "build-default"]);
}
