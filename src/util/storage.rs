//! Durable key/value storage behind the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build persists to `localStorage`; native builds and tests use
//! the shared in-memory map. Both sit behind [`SessionStorage`] so the session
//! store never touches `web-sys` directly.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// String key/value storage that survives page reloads.
///
/// Writes are best-effort: quota or privacy-mode failures are logged by the
/// implementation and otherwise ignored.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// In-memory storage. Clones share the same map, which lets tests simulate a
/// reload by building a fresh store over a clone.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// `window.localStorage`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "csr")]
impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable; {key} not persisted");
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Storage the current build can actually reach.
pub fn default_storage() -> Rc<dyn SessionStorage> {
    #[cfg(feature = "csr")]
    {
        Rc::new(BrowserStorage)
    }
    #[cfg(not(feature = "csr"))]
    {
        Rc::new(MemoryStorage::new())
    }
}

/// Outcome of reading a JSON value that may be missing or corrupt.
#[derive(Debug, PartialEq, Eq)]
pub enum Stored<T> {
    Missing,
    Corrupt,
    Present(T),
}

/// Load and decode the JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(storage: &dyn SessionStorage, key: &str) -> Stored<T> {
    let Some(raw) = storage.get_item(key) else {
        return Stored::Missing;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Stored::Present(value),
        Err(e) => {
            log::warn!("stored {key} is not valid JSON: {e}");
            Stored::Corrupt
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize>(storage: &dyn SessionStorage, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => storage.set_item(key, &raw),
        Err(e) => log::warn!("failed to encode {key}: {e}"),
    }
}
