//! Key-value persistence for the auth token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session manager only needs `set`/`remove` (plus `get` for restore) on a
//! raw string slot. `LocalStorageStore` is the browser implementation;
//! `MemoryStore` keeps the slot in process for hosts without `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! `LocalStorageStore` re-resolves `window.localStorage` on every call instead
//! of holding a handle, which keeps it `Send + Sync` and cheap to clone.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Fixed `localStorage` key holding the opaque auth token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Failure talking to the persistence backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend in this environment (SSR, disabled storage).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend rejected the operation (quota, security error).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A string key-value slot, e.g. browser `localStorage`.
pub trait TokenStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write is rejected.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the delete is rejected.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`. Every operation fails with
/// [`StorageError::Unavailable`] outside the `hydrate` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(e) => Err(backend_error(&e)),
    }
}

#[cfg(feature = "hydrate")]
fn backend_error(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl TokenStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| backend_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| backend_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| backend_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStore {
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
