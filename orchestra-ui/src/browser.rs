//! Browser-side seams: `window.localStorage` and `window.confirm`.

use orchestra_core::{KeyValueStore, MemoryStore, StoreError};
use wasm_bindgen::JsValue;

fn js_err(context: &str, err: JsValue) -> StoreError {
    StoreError::Storage(format!("{context}: {err:?}"))
}

/// `localStorage` when the page is allowed to use it, otherwise an in-memory
/// map so the board still works for the lifetime of the tab.
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Volatile(MemoryStore),
}

impl BrowserStorage {
    pub fn detect() -> Self {
        let storage = web_sys::window()
            .ok_or_else(|| "window not available".to_string())
            .and_then(|w| {
                w.local_storage()
                    .map_err(|e| format!("localStorage access denied: {e:?}"))
            })
            .and_then(|s| s.ok_or_else(|| "localStorage unavailable".to_string()));

        match storage {
            Ok(storage) => Self::Local(storage),
            Err(reason) => {
                leptos::logging::warn!("{reason}; projects will not survive a reload");
                Self::Volatile(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Self::Local(storage) => storage
                .get_item(key)
                .map_err(|e| js_err("localStorage.getItem failed", e)),
            Self::Volatile(memory) => memory.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| js_err("localStorage.setItem failed", e)),
            Self::Volatile(memory) => memory.set(key, value),
        }
    }
}

/// Native `confirm()` dialog. Anything but an explicit OK counts as a refusal.
pub fn confirm_dialog(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}
