//! Single-file persistent backend.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::error::{Error, Result};

use super::StorageBackend;

/// File-backed storage backend.
///
/// All entries live in one JSON object map. The map is loaded once at open
/// and rewritten on every mutation via a temp file + rename, so a crash
/// mid-write leaves the previous state intact.
///
/// An optional byte quota bounds the serialized size of the map; a write
/// that would exceed it fails and leaves the stored state unchanged.
pub struct FileBackend {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
    quota_bytes: Option<u64>,
}

impl FileBackend {
    /// Open the backend at `path`, creating an empty map if the file does
    /// not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_quota(path, None)
    }

    /// Open with a byte quota on the serialized map.
    pub fn open_with_quota(path: impl AsRef<Path>, quota_bytes: Option<u64>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
            quota_bytes,
        })
    }

    /// The file this backend persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, serialized: &str) -> Result<()> {
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serialized)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write();

        let previous = entries.insert(key.to_string(), value.to_string());
        let serialized = serde_json::to_string(&*entries);

        let result = serialized.map_err(Error::from).and_then(|serialized| {
            if let Some(quota) = self.quota_bytes {
                if serialized.len() as u64 > quota {
                    return Err(Error::Storage(format!(
                        "quota exceeded: {} > {} bytes",
                        serialized.len(),
                        quota
                    )));
                }
            }
            self.persist(&serialized)
        });

        // Roll the map back so memory and disk stay in sync.
        if result.is_err() {
            match previous {
                Some(previous) => entries.insert(key.to_string(), previous),
                None => entries.remove(key),
            };
        }

        result
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write();

        let previous = match entries.remove(key) {
            Some(previous) => previous,
            None => return Ok(()),
        };

        let result = serde_json::to_string(&*entries)
            .map_err(Error::from)
            .and_then(|serialized| self.persist(&serialized));

        if result.is_err() {
            entries.insert(key.to_string(), previous);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stash.json");

        let backend = FileBackend::open(&path).unwrap();
        backend.set_item("a", "1").unwrap();
        backend.set_item("b", "2").unwrap();
        drop(backend);

        let backend = FileBackend::open(&path).unwrap();
        assert_eq!(backend.get_item("a").unwrap(), Some("1".to_string()));
        assert_eq!(backend.get_item("b").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn test_quota_rejects_write_and_rolls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stash.json");

        let backend = FileBackend::open_with_quota(&path, Some(64)).unwrap();
        backend.set_item("a", "1").unwrap();

        let oversized = "x".repeat(256);
        assert!(backend.set_item("big", &oversized).is_err());

        // Previous state intact, rejected key absent.
        assert_eq!(backend.get_item("a").unwrap(), Some("1".to_string()));
        assert_eq!(backend.get_item("big").unwrap(), None);

        let backend = FileBackend::open_with_quota(&path, Some(64)).unwrap();
        assert_eq!(backend.get_item("big").unwrap(), None);
    }

    #[test]
    fn test_remove_absent_key_does_not_rewrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stash.json");

        let backend = FileBackend::open(&path).unwrap();
        backend.remove_item("missing").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_open_rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stash.json");
        fs::write(&path, "not json").unwrap();

        assert!(FileBackend::open(&path).is_err());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deep/stash.json");

        let backend = FileBackend::open(&path).unwrap();
        backend.set_item("a", "1").unwrap();
        assert!(path.exists());
    }
}
