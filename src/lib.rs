//! # Stash
//!
//! Namespaced JSON key-value stash over pluggable string storage backends.
//!
//! Stash wraps a string-keyed storage backend (a file, an in-memory map, or
//! anything implementing [`StorageBackend`]) with JSON serialization and
//! optional key namespacing. Every operation returns an [`Outcome`] carrying
//! the value and an error flag instead of propagating failures to the caller.
//!
//! ## Quick Start
//!
//! ```ignore
//! use stashdb::prelude::*;
//!
//! // Open a file-backed stash
//! let stash = Stash::open("./app-state.json")?;
//!
//! // Root store
//! let store = stash.store();
//! store.set("volume", json!(0.8));
//! let volume = store.get_or("volume", json!(1.0));
//!
//! // Namespaced store; keys never collide with the root store
//! let session = stash.namespace("session");
//! session.set("volume", json!(0.2));
//! ```
//!
//! ## Outcome convention
//!
//! Operations never panic and never return `Err` across the store boundary.
//! Callers branch on [`Outcome::error`] before trusting [`Outcome::value`]:
//!
//! ```ignore
//! let result = store.get("volume");
//! if !result.error {
//!     println!("volume = {:?}", result.value);
//! }
//! ```
//!
//! ## Availability
//!
//! The backend is probed once when the stash is opened. If the probe fails,
//! every store created from that stash reports an error outcome for every
//! operation and [`Stash::enabled`] returns `false`. No retry is attempted.

#![warn(missing_docs)]

mod backend;
mod error;
mod outcome;
mod stash;
mod store;

pub mod prelude;

// Re-export main entry points
pub use stash::{Stash, StashBuilder};

// Re-export the outcome wrapper and store accessor
pub use outcome::Outcome;
pub use store::Store;

// Re-export backends
pub use backend::{FileBackend, MemoryBackend, StorageBackend};

// Re-export errors
pub use error::{Error, Result};

// Values are plain JSON values
pub use serde_json::Value;
