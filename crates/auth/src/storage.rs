//! Client-side key/value storage
//!
//! Two backends stand in for the browser's storage areas:
//!
//! - `FileStore` persists a flat JSON object (`storage.json`) and survives
//!   restarts, like `localStorage`.
//! - `MemoryStore` lives only as long as the window, like `sessionStorage`.

use serde_json::Map;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tms_core::{TmsError, TmsResult};

/// Key holding the serialized user
pub const USER_DATA_KEY: &str = "user-data";

/// Key holding the session token
pub const AUTH_TOKEN_KEY: &str = "auth-token";

/// The only token value considered valid
pub const MOCK_TOKEN: &str = "mock-jwt-token";

/// Name of the persistent storage file
pub const STORAGE_FILE_NAME: &str = "storage.json";

// ============================================================================
// KeyValueStore Trait
// ============================================================================

/// String-to-string storage area
pub trait KeyValueStore {
    fn get(&self, key: &str) -> TmsResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> TmsResult<()>;

    fn remove(&mut self, key: &str) -> TmsResult<()>;
}

// ============================================================================
// MemoryStore
// ============================================================================

/// Volatile storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> TmsResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> TmsResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> TmsResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// ============================================================================
// FileStore
// ============================================================================

/// Storage backed by a JSON object on disk
///
/// Every operation reads the file, so edits made outside the app (or a
/// second window) are picked up. A missing file reads as empty. Reading a
/// corrupt file is an error, but writing replaces it.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store named `storage.json` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(STORAGE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> TmsResult<Map<String, serde_json::Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let json = std::fs::read_to_string(&self.path).map_err(|e| TmsError::StorageRead {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        if json.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&json).map_err(|e| TmsError::StorageRead {
            path: self.path.clone(),
            message: format!("Invalid storage file: {}", e),
        })
    }

    /// Entries to rewrite, starting over when the file cannot be parsed.
    /// The flag is set when the old contents were discarded.
    fn load_for_write(&self) -> TmsResult<(Map<String, serde_json::Value>, bool)> {
        match self.load() {
            Ok(entries) => Ok((entries, false)),
            Err(TmsError::StorageRead { message, .. }) if self.path.is_file() => {
                tracing::warn!(
                    "Discarding unreadable storage file {}: {}",
                    self.path.display(),
                    message
                );
                Ok((Map::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, entries: &Map<String, serde_json::Value>) -> TmsResult<()> {
        let json = serde_json::to_string_pretty(entries).map_err(|e| TmsError::StorageWrite {
            path: self.path.clone(),
            message: format!("Failed to serialize storage: {}", e),
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| TmsError::StorageWrite {
                    path: parent.to_path_buf(),
                    message: e.to_string(),
                })?;
            }
        }

        std::fs::write(&self.path, json).map_err(|e| TmsError::StorageWrite {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!("Wrote {} storage keys to {}", entries.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> TmsResult<Option<String>> {
        Ok(self
            .load()?
            .get(key)
            .and_then(|value| value.as_str())
            .map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> TmsResult<()> {
        let (mut entries, _) = self.load_for_write()?;
        entries.insert(key.to_string(), serde_json::Value::String(value.to_string()));
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> TmsResult<()> {
        let (mut entries, discarded) = self.load_for_write()?;
        if entries.remove(key).is_some() || discarded {
            self.save(&entries)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path());
        store.set(AUTH_TOKEN_KEY, MOCK_TOKEN).unwrap();

        let reopened = FileStore::in_dir(dir.path());
        assert_eq!(reopened.get(AUTH_TOKEN_KEY).unwrap().as_deref(), Some(MOCK_TOKEN));
        assert!(dir.path().join(STORAGE_FILE_NAME).exists());
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("storage.json"));
        assert_eq!(store.get(USER_DATA_KEY).unwrap(), None);

        // Removing from a missing file does not create it
        store.remove(USER_DATA_KEY).unwrap();
        assert!(!store.path().exists());

        // Writing creates the parent directory
        store.set(USER_DATA_KEY, "{}").unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_file_store_corrupt_file_is_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORAGE_FILE_NAME);
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        let err = store.get(AUTH_TOKEN_KEY).unwrap_err();
        assert!(err.is_storage());
    }

    #[test]
    fn test_file_store_rewrites_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORAGE_FILE_NAME);
        std::fs::write(&path, "{garbage").unwrap();

        let mut store = FileStore::new(&path);
        store.set(AUTH_TOKEN_KEY, MOCK_TOKEN).unwrap();
        assert_eq!(store.get(AUTH_TOKEN_KEY).unwrap().as_deref(), Some(MOCK_TOKEN));

        std::fs::write(&path, "{garbage").unwrap();
        store.remove(AUTH_TOKEN_KEY).unwrap();
        assert_eq!(store.get(AUTH_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path());
        store.set("theme", "dark").unwrap();
        store.set(AUTH_TOKEN_KEY, MOCK_TOKEN).unwrap();
        store.remove(AUTH_TOKEN_KEY).unwrap();

        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get(AUTH_TOKEN_KEY).unwrap(), None);
    }
}
