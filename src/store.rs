//! Namespaced store accessor.
//!
//! A [`Store`] provides get/set/remove over the backend with a JSON envelope
//! and namespaced key naming. Every operation returns an
//! [`Outcome`](crate::Outcome); failures are reported as data and never
//! propagate as `Err` or panics.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use crate::backend::StorageBackend;
use crate::error::Result;
use crate::outcome::Outcome;

/// Prefix applied to every key the store writes to the backend.
const KEY_PREFIX: &str = "Storage_";

/// Namespaced accessor over the storage backend.
///
/// Obtained from [`Stash::store`](crate::Stash::store) or
/// [`Stash::namespace`](crate::Stash::namespace). Stateless between calls;
/// cheap to create and to clone.
///
/// # Key layout
///
/// The backend key for `key` is `"Storage_" + namespace + "." + key` when a
/// namespace is set, `"Storage_" + key` otherwise. The stored value is the
/// string `{"data":<json>}`; the envelope distinguishes stored falsy values
/// (`0`, `false`, `null`, `""`) from absent keys.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
    namespace: Option<String>,
    enabled: bool,
}

impl Store {
    pub(crate) fn new(
        backend: Arc<dyn StorageBackend>,
        namespace: Option<String>,
        enabled: bool,
    ) -> Self {
        Self { backend, namespace, enabled }
    }

    /// The namespace this store is bound to, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Whether the backend passed its availability probe.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Retrieve the value stored for `key`.
    ///
    /// Returns a success outcome carrying the stored value, or carrying no
    /// value when the key is absent. Returns a failure outcome when the
    /// backend is disabled or the stored content cannot be deserialized.
    ///
    /// # Example
    ///
    /// ```ignore
    /// store.set("volume", json!(0.8));
    /// assert_eq!(store.get("volume").value, Some(json!(0.8)));
    /// ```
    pub fn get(&self, key: &str) -> Outcome {
        self.get_with(key, None)
    }

    /// Retrieve the value stored for `key`, or `default` if absent.
    ///
    /// The default applies only when the key holds no value; it is not
    /// applied on failure outcomes (disabled backend, malformed content).
    ///
    /// # Example
    ///
    /// ```ignore
    /// let volume = store.get_or("volume", json!(1.0));
    /// ```
    pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Outcome {
        self.get_with(key, Some(default.into()))
    }

    fn get_with(&self, key: &str, default: Option<Value>) -> Outcome {
        if !self.enabled {
            return Outcome::failure();
        }

        match self.read_envelope(key) {
            Ok(Some(data)) => Outcome::success(Some(data)),
            Ok(None) => Outcome::success(default),
            Err(e) => {
                debug!(key, error = %e, "get failed");
                Outcome::failure()
            }
        }
    }

    /// Set `key` to the specified value.
    ///
    /// Passing `None` performs no write and succeeds; use
    /// [`remove`](Store::remove) to delete a key. Note: non-finite floats
    /// (`NaN`, infinities) are stored as `null` by JSON serialization
    /// semantics.
    ///
    /// # Example
    ///
    /// ```ignore
    /// store.set("volume", json!(0.8));
    /// store.set("muted", json!(false));
    /// ```
    pub fn set(&self, key: &str, value: impl Into<Option<Value>>) -> Outcome {
        if !self.enabled {
            return Outcome::failure();
        }

        let Some(value) = value.into() else {
            return Outcome::success(Some(Value::Null));
        };

        match self.write_envelope(key, value) {
            Ok(()) => Outcome::success(Some(Value::Null)),
            Err(e) => {
                debug!(key, error = %e, "set failed");
                Outcome::failure()
            }
        }
    }

    /// Remove `key` from the backend.
    ///
    /// Removing an absent key succeeds.
    pub fn remove(&self, key: &str) -> Outcome {
        if !self.enabled {
            return Outcome::failure();
        }

        match self.backend.remove_item(&self.full_key_name(key)) {
            Ok(()) => Outcome::success(Some(Value::Null)),
            Err(e) => {
                debug!(key, error = %e, "remove failed");
                Outcome::failure()
            }
        }
    }

    /// Read and unwrap the envelope stored for `key`.
    ///
    /// `Ok(None)` covers the absent key, a non-object payload, and an
    /// envelope without a `data` member; all of those fall back to the
    /// caller's default.
    fn read_envelope(&self, key: &str) -> Result<Option<Value>> {
        let raw = match self.backend.get_item(&self.full_key_name(key))? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let envelope: Value = serde_json::from_str(&raw)?;
        match envelope {
            Value::Object(mut fields) => Ok(fields.remove("data")),
            _ => Ok(None),
        }
    }

    fn write_envelope(&self, key: &str, value: Value) -> Result<()> {
        let raw = serde_json::to_string(&json!({ "data": value }))?;
        self.backend.set_item(&self.full_key_name(key), &raw)
    }

    /// Create the full backend key name for `key`.
    fn full_key_name(&self, key: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}{}.{}", KEY_PREFIX, namespace, key),
            None => format!("{}{}", KEY_PREFIX, key),
        }
    }
}
