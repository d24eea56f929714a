//! Local storage adapter

use roster_common::{KeyValueStorage, StorageError};
use tracing::warn;
use wasm_bindgen_x::JsValue;

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

fn local_storage(op: &'static str, key: &str) -> Result<web_sys_x::Storage, StorageError> {
    web_sys_x::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| unavailable(op, key))
}

fn unavailable(op: &'static str, key: &str) -> StorageError {
    warn!("localStorage unavailable for {op} '{key}'");
    StorageError::Unavailable
}

fn js_error(op: &'static str, key: &str, err: JsValue) -> StorageError {
    let err = StorageError::Backend(format!("{err:?}"));
    warn!("localStorage {op} '{key}' failed: {err}");
    err
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage("read", key)?
            .get_item(key)
            .map_err(|e| js_error("read", key, e))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage("write", key)?
            .set_item(key, value)
            .map_err(|e| js_error("write", key, e))
    }
}
