//! Storage backends.
//!
//! A backend is the underlying string-keyed primitive the stash wraps. The
//! contract mirrors web storage: `get_item` returns the stored string or
//! `None`, `set_item` and `remove_item` may fail (quota, I/O). The store
//! guards every backend call and folds failures into error outcomes.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::error::Result;

/// The underlying string-keyed storage primitive.
///
/// Implementations must be safe to share across threads; each method call is
/// atomic with respect to other calls on the same backend.
pub trait StorageBackend: Send + Sync {
    /// Read the string stored under `key`, or `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Deleting an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}
