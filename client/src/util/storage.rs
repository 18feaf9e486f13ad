//! Key-value persistence behind a trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The social login flow keeps one JSON user blob per email, and the theme
//! toggle keeps a boolean. In the browser both go to `localStorage`; tests
//! use [`MemoryStore`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage rejected the write for {0}")]
    WriteFailed(String),
    #[error("stored value under {key} is not valid: {message}")]
    Corrupt { key: String, message: String },
}

/// Minimal string store. Implementations use interior mutability so a shared
/// reference is enough to write.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// [`StorageError::Unavailable`] when the backend cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// [`StorageError::Unavailable`] or [`StorageError::WriteFailed`].
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// [`StorageError::Unavailable`] when the backend cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON value. A missing key is `Ok(None)`.
///
/// # Errors
///
/// Backend failures, or [`StorageError::Corrupt`] when the stored text does
/// not decode as `T`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Corrupt { key: key.to_owned(), message: e.to_string() })
}

/// Encode and write a JSON value.
///
/// # Errors
///
/// Backend failures, or [`StorageError::Corrupt`] if `value` cannot be encoded.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| StorageError::Corrupt { key: key.to_owned(), message: e.to_string() })?;
    store.set(key, &raw)
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage`. Outside the `csr` build every call reports
/// [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().unwrap_or_default())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::WriteFailed(key.to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(key).map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}
