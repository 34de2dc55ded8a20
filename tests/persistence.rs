//! File backend persistence tests.
//!
//! Values written through a file-backed stash must survive reopen, quota
//! failures must leave prior data intact, and corrupt stored content must
//! surface as error outcomes rather than panics.

use std::sync::Arc;

use stashdb::prelude::*;
use tempfile::TempDir;

#[test]
fn test_values_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stash.json");

    let stash = Stash::open(&path).unwrap();
    stash.store().set("foo", json!(23));
    stash.namespace("test").set("foo", json!({ "a": 1 }));
    drop(stash);

    let stash = Stash::open(&path).unwrap();
    assert_eq!(stash.store().get("foo").value, Some(json!(23)));
    assert_eq!(stash.namespace("test").get("foo").value, Some(json!({ "a": 1 })));
}

#[test]
fn test_remove_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stash.json");

    let stash = Stash::open(&path).unwrap();
    stash.store().set("foo", json!(23));
    stash.store().remove("foo");
    drop(stash);

    let stash = Stash::open(&path).unwrap();
    let result = stash.store().get_or("foo", json!("d"));
    assert_eq!(result.value, Some(json!("d")));
    assert!(result.is_ok());
}

#[test]
fn test_quota_exceeding_write_fails_and_keeps_prior_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stash.json");

    let stash = Stash::builder().path(&path).quota(128).open().unwrap();
    let store = stash.store();

    assert!(store.set("small", json!(1)).is_ok());

    let result = store.set("big", json!("x".repeat(512)));
    assert!(result.is_err());
    assert_eq!(result.value, Some(Value::Null));

    // Prior data still readable, rejected key absent - before and after reopen.
    assert_eq!(store.get("small").value, Some(json!(1)));
    assert_eq!(store.get("big").value, None);
    drop(stash);

    let stash = Stash::builder().path(&path).quota(128).open().unwrap();
    assert_eq!(stash.store().get("small").value, Some(json!(1)));
    assert_eq!(stash.store().get("big").value, None);
}

#[test]
fn test_corrupt_envelope_yields_error_outcome() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stash.json");

    let backend = Arc::new(FileBackend::open(&path).unwrap());
    backend.set_item("Storage_foo", "{broken").unwrap();

    let stash = Stash::builder().backend(backend).open().unwrap();
    let result = stash.store().get("foo");
    assert!(result.is_err());
    assert_eq!(result.value, Some(Value::Null));
}

#[test]
fn test_namespaces_share_one_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stash.json");

    let stash = Stash::open(&path).unwrap();
    stash.store().set("k", json!(1));
    stash.namespace("a").set("k", json!(2));
    stash.namespace("b").set("k", json!(3));

    assert!(path.exists());
    assert_eq!(stash.store().get("k").value, Some(json!(1)));
    assert_eq!(stash.namespace("a").get("k").value, Some(json!(2)));
    assert_eq!(stash.namespace("b").get("k").value, Some(json!(3)));
}
