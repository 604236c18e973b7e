//! localStorage Backend

use tally_core::{KeyValueStore, StorageError};

use super::js_error_message;

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or_else(|| StorageError("no window".to_string()))?
        .local_storage()
        .map_err(|e| StorageError(js_error_message(&e)))?
        .ok_or_else(|| StorageError("localStorage is disabled".to_string()))
}

impl KeyValueStore for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError(js_error_message(&e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError(js_error_message(&e)))
    }
}
