//! In-memory backend.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::Result;

use super::StorageBackend;

/// In-memory storage backend.
///
/// Holds all entries in a lock-guarded map for the lifetime of the process.
/// Operations never fail. Use for tests, caching, and ephemeral state.
#[derive(Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let backend = MemoryBackend::new();

        backend.set_item("a", "1").unwrap();
        assert_eq!(backend.get_item("a").unwrap(), Some("1".to_string()));

        backend.set_item("a", "2").unwrap();
        assert_eq!(backend.get_item("a").unwrap(), Some("2".to_string()));

        backend.remove_item("a").unwrap();
        assert_eq!(backend.get_item("a").unwrap(), None);
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let backend = MemoryBackend::new();
        backend.remove_item("missing").unwrap();
        assert!(backend.is_empty());
    }

    #[test]
    fn test_len() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.len(), 0);

        backend.set_item("a", "1").unwrap();
        backend.set_item("b", "2").unwrap();
        assert_eq!(backend.len(), 2);
    }
}
