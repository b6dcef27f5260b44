//! Layered configuration.
//!
//! Sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (`backlog.toml` shipped with the library)
//! 2. User config in home directory (`~/.config/backlog/backlog.toml`)
//! 3. User config in current directory (`./backlog.toml`)
//! 4. Environment variables prefixed `BACKLOG__` (e.g. `BACKLOG__GEMINI__MODEL`)

use backlog_error::{BacklogError, BacklogResult, ConfigError};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../backlog.toml");

/// Settings for the Gemini endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the default API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

/// Settings for the persisted credential store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CredentialsConfig {
    /// Key the user-entered API key is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Store file location; the platform config directory if unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            store_path: None,
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_storage_key() -> String {
    "gemini_api_key".to_string()
}

/// Top-level configuration.
///
/// # Example
///
/// ```no_run
/// use backlog_core::BacklogConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = BacklogConfig::load()?;
/// println!("Using model {}", config.gemini.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct BacklogConfig {
    /// Gemini endpoint settings
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Credential store settings
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

impl BacklogConfig {
    /// Load configuration from a specific file path only.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> BacklogResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                BacklogError::from(ConfigError::in_file(
                    path.as_ref(),
                    format!("Failed to read configuration: {}", e),
                ))
            })?
            .try_deserialize()
            .map_err(|e| {
                BacklogError::from(ConfigError::in_file(
                    path.as_ref(),
                    format!("Failed to parse configuration: {}", e),
                ))
            })
    }

    /// Load configuration with the standard precedence.
    #[instrument]
    pub fn load() -> BacklogResult<Self> {
        Self::load_with_override(None::<&Path>)
    }

    /// Load configuration with the standard precedence plus an explicit file.
    ///
    /// The explicit file, when given, is required and sits above the
    /// current-directory file but below environment variables.
    #[instrument(skip(path))]
    pub fn load_with_override(path: Option<impl AsRef<Path>>) -> BacklogResult<Self> {
        debug!("Loading configuration: env > explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/backlog/backlog.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("backlog").required(false));

        let explicit = path.map(|p| p.as_ref().to_path_buf());
        if let Some(path) = &explicit {
            builder = builder.add_source(File::from(path.as_path()));
        }

        builder = builder.add_source(Environment::with_prefix("BACKLOG").separator("__"));

        builder
            .build()
            .map_err(|e| {
                let message = format!("Failed to build configuration: {}", e);
                BacklogError::from(match &explicit {
                    Some(path) => ConfigError::in_file(path, message),
                    None => ConfigError::new(message),
                })
            })?
            .try_deserialize()
            .map_err(|e| {
                BacklogError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Parse configuration from a TOML string.
    ///
    /// ```
    /// use backlog_core::BacklogConfig;
    ///
    /// let config = BacklogConfig::from_toml("[gemini]\nmodel = \"gemini-2.5-pro\"").unwrap();
    /// assert_eq!(config.gemini.model, "gemini-2.5-pro");
    /// assert_eq!(config.credentials.storage_key, "gemini_api_key");
    /// ```
    pub fn from_toml(source: &str) -> BacklogResult<Self> {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| {
                BacklogError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
