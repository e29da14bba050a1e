//! Key-value persistence
//!
//! Everything the game keeps between sessions is a short string under a
//! fixed key: LocalStorage in the browser, an in-memory map elsewhere.

use std::collections::HashMap;

/// Minimal string key-value store
pub trait KeyValueStore {
    /// Read a value; missing keys and unreadable storage both yield `None`
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, returning whether it was stored
    fn set(&mut self, key: &str, value: &str) -> bool;
}

/// Volatile store used natively and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        self.entries.insert(key.to_string(), value.to_string());
        true
    }
}

/// Browser LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    /// Open the window's LocalStorage. Private browsing modes may deny
    /// access; the store then behaves as permanently empty.
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - progress will not be saved");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        let Some(storage) = &self.storage else {
            return false;
        };
        match storage.set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to write {}: {:?}", key, e);
                false
            }
        }
    }
}
