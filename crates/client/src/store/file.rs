//! File-backed store.
//!
//! The whole store is one JSON object mapping keys to string values, the
//! same shape browser local storage exposes. Entries are kept sorted so the
//! file contents depend only on the data.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use super::{KeyValueStore, StoreError};

/// A store persisted to a single JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; the file
    /// is only created on the first `set`.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or is not a JSON
    /// object of strings.
    #[instrument(fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|source| {
                StoreError::MalformedFile {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        debug!(entries = entries.len(), "Opened store");

        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `entries` to disk via a temporary sibling file and rename.
    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(entries)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&tmp, content).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        // Only commit in memory what reached disk.
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value);
        self.persist(&entries)?;
        self.entries = entries;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("store.json")).unwrap();
        assert!(!store.has("customerUsers").unwrap());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("jollibeeMenu", "[]".to_string()).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("jollibeeMenu").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_failed_write_leaves_key_absent() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        let mut store = FileStore::open(blocker.join("store.json")).unwrap();

        // A regular file where the parent directory should be.
        fs::write(&blocker, "").unwrap();
        assert!(matches!(
            store.set("customerUsers", "[]".to_string()),
            Err(StoreError::Io { .. })
        ));
        assert!(!store.has("customerUsers").unwrap());

        fs::remove_file(&blocker).unwrap();
        store.set("customerUsers", "[]".to_string()).unwrap();
        let reopened = FileStore::open(blocker.join("store.json")).unwrap();
        assert!(reopened.has("customerUsers").unwrap());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut store = FileStore::open(&path).unwrap();

        // A non-empty directory at the target path makes the rename fail.
        fs::create_dir_all(path.join("occupied")).unwrap();
        assert!(store.set("staffUsers", "[]".to_string()).is_err());
        assert!(!store.has("staffUsers").unwrap());
        assert!(!dir.path().join("store.json.tmp").exists());
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(
            FileStore::open(&path),
            Err(StoreError::MalformedFile { .. })
        ));
    }
}
