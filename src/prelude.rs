//! Convenient imports for the stash.
//!
//! Re-exports the most commonly used types so you can get started with a
//! single import:
//!
//! ```ignore
//! use stashdb::prelude::*;
//!
//! let stash = Stash::open("./app-state.json")?;
//! stash.store().set("key", json!("value"));
//! ```

// Main entry point
pub use crate::stash::{Stash, StashBuilder};

// Store accessor and outcome wrapper
pub use crate::outcome::Outcome;
pub use crate::store::Store;

// Backends
pub use crate::backend::{FileBackend, MemoryBackend, StorageBackend};

// Error handling
pub use crate::error::{Error, Result};

// Values and the json! constructor
pub use serde_json::{json, Value};
