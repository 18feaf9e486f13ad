use super::*;

use storyboard::user::{AuthProvider, User};

#[test]
fn memory_store_roundtrips_strings() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k"), Ok(None));
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k"), Ok(Some("v".to_owned())));
    store.remove("k").unwrap();
    assert!(store.is_empty());
}

#[test]
fn json_helpers_store_user_blob() {
    let store = MemoryStore::new();
    let user = User::from_identity(AuthProvider::Apple, AuthProvider::Apple.identity(3), 3);
    save_json(&store, "user_user@icloud.com", &user).unwrap();
    let back: Option<User> = load_json(&store, "user_user@icloud.com").unwrap();
    assert_eq!(back, Some(user));
}

#[test]
fn missing_key_loads_none() {
    let store = MemoryStore::new();
    let value: Option<User> = load_json(&store, "absent").unwrap();
    assert!(value.is_none());
}

#[test]
fn corrupt_blob_is_reported() {
    let store = MemoryStore::new();
    store.set("user_x", "{not json").unwrap();
    let err = load_json::<User>(&store, "user_x").unwrap_err();
    assert!(matches!(err, StorageError::Corrupt { ref key, .. } if key == "user_x"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_unavailable_on_host() {
    assert_eq!(BrowserStore.get("x"), Err(StorageError::Unavailable));
    assert_eq!(BrowserStore.set("x", "y"), Err(StorageError::Unavailable));
}
