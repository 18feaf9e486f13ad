#![cfg(not(feature = "csr"))]

use super::*;
use crate::util::storage::{BrowserStore, MemoryStore};

#[test]
fn read_preference_defaults_to_light_without_stored_value() {
    assert!(!read_preference(&MemoryStore::new()));
    assert!(!read_preference(&BrowserStore));
}

#[test]
fn toggle_flips_and_persists() {
    let store = MemoryStore::new();
    assert!(toggle(&store, false));
    assert!(read_preference(&store));
    assert!(!toggle(&store, true));
    assert!(!read_preference(&store));
}

#[test]
fn toggle_still_flips_when_store_is_unavailable() {
    assert!(toggle(&BrowserStore, false));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
