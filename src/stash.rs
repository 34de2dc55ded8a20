//! Main entry point for the stash.
//!
//! This module provides the [`Stash`] struct, which owns the storage backend,
//! performs the one-time availability probe, and hands out [`Store`]
//! accessors.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::warn;

use crate::backend::{FileBackend, MemoryBackend, StorageBackend};
use crate::error::Result;
use crate::store::Store;

/// Key written and deleted by the availability probe.
const DETECT_KEY: &str = "detect";

/// The stash.
///
/// Create one with [`Stash::open`], [`Stash::ephemeral`], or
/// [`Stash::builder`], then obtain stores with [`store`](Stash::store) or
/// [`namespace`](Stash::namespace).
///
/// # Example
///
/// ```ignore
/// use stashdb::prelude::*;
///
/// let stash = Stash::open("./app-state.json")?;
///
/// let store = stash.store();
/// store.set("volume", json!(0.8));
///
/// let session = stash.namespace("session");
/// session.set("volume", json!(0.2));
/// ```
///
/// # Availability
///
/// Opening a stash probes the backend once with a trial write and delete.
/// If the probe fails, the stash still opens, but `enabled()` is `false`
/// and every operation on every store returns a failure outcome. The probe
/// is never retried.
pub struct Stash {
    backend: Arc<dyn StorageBackend>,
    enabled: bool,
}

impl Stash {
    /// Open a file-backed stash at the given path.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let stash = Stash::open("./app-state.json")?;
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(path).open()
    }

    /// Create an in-memory stash with no disk I/O.
    ///
    /// All data is lost when the stash is dropped. Use for tests and
    /// ephemeral state.
    pub fn ephemeral() -> Result<Self> {
        Self::builder().in_memory().open()
    }

    /// Create a builder for stash configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let stash = Stash::builder()
    ///     .path("./app-state.json")
    ///     .quota(64 * 1024)
    ///     .open()?;
    /// ```
    pub fn builder() -> StashBuilder {
        StashBuilder::new()
    }

    /// Get a store with no namespace.
    pub fn store(&self) -> Store {
        Store::new(Arc::clone(&self.backend), None, self.enabled)
    }

    /// Get a store bound to `namespace`.
    ///
    /// Stores with distinct namespaces target disjoint key spaces and never
    /// interfere.
    pub fn namespace(&self, namespace: impl Into<String>) -> Store {
        Store::new(Arc::clone(&self.backend), Some(namespace.into()), self.enabled)
    }

    /// Whether the backend passed its availability probe.
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

/// Builder for [`Stash`] configuration.
///
/// With no configuration, `open()` yields an in-memory stash.
#[derive(Default)]
pub struct StashBuilder {
    path: Option<PathBuf>,
    in_memory: bool,
    quota_bytes: Option<u64>,
    backend: Option<Arc<dyn StorageBackend>>,
}

impl StashBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Back the stash with a file at `path`.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Back the stash with an in-memory map.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Limit the file backend's serialized size to `bytes`.
    ///
    /// Writes that would exceed the quota fail and surface as error
    /// outcomes. Ignored for in-memory and injected backends.
    pub fn quota(mut self, bytes: u64) -> Self {
        self.quota_bytes = Some(bytes);
        self
    }

    /// Use a custom backend.
    ///
    /// Takes precedence over `path` and `in_memory`.
    pub fn backend(mut self, backend: Arc<dyn StorageBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Open the stash.
    ///
    /// Backend construction errors (unreadable or malformed backing file)
    /// are returned as `Err`. A backend that constructs but fails the
    /// availability probe yields a disabled stash, not an error.
    pub fn open(self) -> Result<Stash> {
        let backend: Arc<dyn StorageBackend> = match (self.backend, self.path) {
            (Some(backend), _) => backend,
            (None, Some(path)) if !self.in_memory => {
                Arc::new(FileBackend::open_with_quota(path, self.quota_bytes)?)
            }
            _ => Arc::new(MemoryBackend::new()),
        };

        let enabled = probe(backend.as_ref());

        Ok(Stash { backend, enabled })
    }
}

/// Trial write and delete against the backend.
fn probe(backend: &dyn StorageBackend) -> bool {
    let trial = backend
        .set_item(DETECT_KEY, DETECT_KEY)
        .and_then(|_| backend.remove_item(DETECT_KEY));

    match trial {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "storage backend is not available; all stash operations will fail");
            false
        }
    }
}
