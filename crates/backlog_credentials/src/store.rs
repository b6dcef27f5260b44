//! Local key-value stores for user-entered secrets.

use backlog_core::CredentialsConfig;
use backlog_error::{BacklogResult, StorageError, StorageErrorKind};
use backlog_interface::CredentialStore;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, instrument};

/// Credentials kept in a JSON object on disk.
///
/// The file maps storage keys to values, e.g. `{"gemini_api_key": "..."}`.
/// A missing file reads as an empty store. On unix the file is created
/// readable by the owner only.
///
/// # Example
///
/// ```no_run
/// use backlog_credentials::FileCredentialStore;
/// use backlog_interface::CredentialStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = FileCredentialStore::at_default_path()?;
/// store.save("gemini_api_key", "AIza...")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<config dir>/backlog/credentials.json`.
    pub fn at_default_path() -> BacklogResult<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Store at the configured path, or the default path if none is set.
    pub fn from_config(config: &CredentialsConfig) -> BacklogResult<Self> {
        match &config.store_path {
            Some(path) => Ok(Self::new(path.clone())),
            None => Self::at_default_path(),
        }
    }

    /// `<config dir>/backlog/credentials.json` for this platform.
    pub fn default_path() -> BacklogResult<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| StorageError::new(StorageErrorKind::NoConfigDir))?;
        Ok(dir.join("backlog").join("credentials.json"))
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> BacklogResult<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Credential store not found, treating as empty");
                return Ok(BTreeMap::new());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            StorageError::new(StorageErrorKind::Corrupt(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
            .into()
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> BacklogResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let body = serde_json::to_string_pretty(entries).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "failed to serialize store: {}",
                e
            )))
        })?;

        let write_err = |e: std::io::Error| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        };

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path).map_err(write_err)?;
        // `mode` only applies on create; an existing file keeps its bits.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(write_err)?;
        }
        file.write_all(body.as_bytes()).map_err(write_err)?;
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self, key: &str) -> BacklogResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    #[instrument(skip(self, value), fields(path = %self.path.display()))]
    fn save(&self, key: &str, value: &str) -> BacklogResult<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)?;
        debug!("Saved credential");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn remove(&self, key: &str) -> BacklogResult<bool> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_none() {
            return Ok(false);
        }
        self.write_all(&entries)?;
        debug!("Removed credential");
        Ok(true)
    }
}

/// Credentials kept in process memory only.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self, key: &str) -> BacklogResult<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> BacklogResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> BacklogResult<bool> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.remove(key).is_some())
    }
}
