//! Browser Storage Backend
//!
//! `localStorage` behind the core `KeyValueStore` trait. When the browser
//! refuses access (privacy mode, sandboxed iframes) the list still works
//! for the current session from memory.

use grocery_core::{GroceryError, GroceryResult, KeyValueStore, MemoryStore};
use tracing::warn;
use wasm_bindgen::JsValue;

pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> GroceryResult<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> GroceryResult<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> GroceryResult<()> {
        self.storage.remove_item(key).map_err(js_error)
    }

    fn clear(&mut self) -> GroceryResult<()> {
        self.storage.clear().map_err(js_error)
    }
}

/// Storage actually used by the app
pub enum Backend {
    Browser(BrowserStorage),
    Session(MemoryStore),
}

impl Backend {
    pub fn open() -> Self {
        match BrowserStorage::open() {
            Some(storage) => Backend::Browser(storage),
            None => {
                warn!("localStorage unavailable, items will not persist");
                Backend::Session(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for Backend {
    fn get(&self, key: &str) -> GroceryResult<Option<String>> {
        match self {
            Backend::Browser(s) => s.get(key),
            Backend::Session(s) => s.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> GroceryResult<()> {
        match self {
            Backend::Browser(s) => s.set(key, value),
            Backend::Session(s) => s.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> GroceryResult<()> {
        match self {
            Backend::Browser(s) => s.remove(key),
            Backend::Session(s) => s.remove(key),
        }
    }

    fn clear(&mut self) -> GroceryResult<()> {
        match self {
            Backend::Browser(s) => s.clear(),
            Backend::Session(s) => s.clear(),
        }
    }
}

fn js_error(err: JsValue) -> GroceryError {
    GroceryError::Storage(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
