//! `window.localStorage` backend.

use wasm_bindgen::JsValue;

use crate::error::StoreError;
use crate::store::KeyValueStore;

/// Handle to the page's `localStorage`.
///
/// Zero-sized: every call looks the storage object up again, so the handle
/// can be cloned freely.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        window
            .local_storage()
            .map_err(backend_error)?
            .ok_or(StoreError::Unavailable)
    }
}

fn backend_error(value: JsValue) -> StoreError {
    StoreError::Backend(format!("{value:?}"))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(key).map_err(backend_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?.set_item(key, value).map_err(backend_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        Self::storage()?.remove_item(key).map_err(backend_error)
    }
}
