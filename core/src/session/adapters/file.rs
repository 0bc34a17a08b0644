use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::get_default_config_dir;
use crate::session::store::{SessionStore, SessionStoreError, StoredSession};

/// File-backed implementation of SessionStore.
///
/// The session lives in a single JSON document. Writes go through a sibling
/// temp file and a rename so a crash cannot leave a torn user/token pair on
/// disk.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the default location, `~/.config/basix/session.json`
    pub fn at_default_path() -> Result<Self, SessionStoreError> {
        let dir = get_default_config_dir()
            .map_err(|e| SessionStoreError::StorageError(e.to_string()))?;
        Ok(Self::new(dir.join("session.json")))
    }

    /// The file this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<StoredSession>, SessionStoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            SessionStoreError::StorageError(format!("Failed to read session file: {}", e))
        })?;

        let session = serde_json::from_str(&content).map_err(|e| {
            SessionStoreError::InvalidData(format!("Failed to parse session file: {}", e))
        })?;

        Ok(Some(session))
    }

    fn save(&self, stored: &StoredSession) -> Result<(), SessionStoreError> {
        let content = serde_json::to_string_pretty(stored).map_err(|e| {
            SessionStoreError::StorageError(format!("Failed to serialize session: {}", e))
        })?;

        // Ensure the directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SessionStoreError::StorageError(format!(
                    "Failed to create session directory: {}",
                    e
                ))
            })?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(|e| {
            SessionStoreError::StorageError(format!("Failed to write session file: {}", e))
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            SessionStoreError::StorageError(format!("Failed to replace session file: {}", e))
        })?;

        debug!("Saved session to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed session file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::StorageError(format!(
                "Failed to remove session file: {}",
                e
            ))),
        }
    }
}
