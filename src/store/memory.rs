//! In-memory storage backend.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;

use super::KeyValueStore;
use crate::error::StoreError;

/// Shared in-memory key-value map.
///
/// Clones share the same map, so a test can keep one handle to inspect what
/// a controller wrote through another.
///
/// ```
/// use bonk_big_word::store::{KeyValueStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// let mut handle = store.clone();
/// handle.set("currentTeam", "purple").unwrap();
///
/// assert_eq!(store.get("currentTeam").unwrap().as_deref(), Some("purple"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<FxHashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with raw entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Rc::new(RefCell::new(map)),
        }
    }

    /// Number of keys stored.
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
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
