//! Key/value string stores backing [`DataCache`](super::DataCache).

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::CacheError;

/// Session-scoped string key/value store.
pub trait CacheStorage {
    /// Returns `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;
    fn remove(&self, key: &str) -> Result<(), CacheError>;
}

impl<S: CacheStorage + ?Sized> CacheStorage for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        (**self).remove(key)
    }
}

/// In-process map. Lives as long as the value, which makes it session-scoped
/// for native hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl CacheStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser `sessionStorage`.
///
/// Cleared when the tab/window is closed, so cached payloads survive
/// navigation within a session but never a fresh visit.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStorage;

#[cfg(target_arch = "wasm32")]
impl SessionStorage {
    fn storage() -> Result<web_sys::Storage, CacheError> {
        web_sys::window()
            .and_then(|w| w.session_storage().ok().flatten())
            .ok_or(CacheError::StorageUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl CacheStorage for SessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| CacheError::ReadFailed(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| CacheError::WriteFailed(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| CacheError::WriteFailed(format!("{:?}", e)))
    }
}
