//! Payload cache with strict time-to-live.
//!
//! [`DataCache`] is an explicit service: build one at the application root
//! and hand the same [`SharedCache`] to every
//! [`FetchController`](crate::FetchController). Entries are stored as JSON
//! strings so any session-scoped [`CacheStorage`] can back it.
//!
//! Entries are never deleted by the cache itself. An entry older than the
//! TTL is simply a miss, and the next successful fetch under the same key
//! overwrites it.

mod storage;

use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::clock::{Clock, SystemClock};
use crate::config::CACHE_KEY_PREFIX;
use crate::error::CacheError;

#[cfg(target_arch = "wasm32")]
pub use storage::SessionStorage;
pub use storage::{CacheStorage, MemoryStorage};

/// Shared handle to the application's cache.
pub type SharedCache = Rc<DataCache>;

/// A stored payload and the time it was fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<P> {
    pub key: String,
    /// Raw fetch result, before any transform.
    pub payload: P,
    /// Milliseconds since the Unix epoch.
    pub fetched_at: u64,
}

impl<P> CacheEntry<P> {
    /// `true` while the entry is younger than `ttl`.
    pub fn is_fresh(&self, now_ms: u64, ttl: Duration) -> bool {
        now_ms.saturating_sub(self.fetched_at) < ttl.as_millis() as u64
    }
}

/// Keyed payload cache.
pub struct DataCache {
    storage: Box<dyn CacheStorage>,
    clock: Box<dyn Clock>,
    prefix: String,
}

impl DataCache {
    pub fn new(storage: impl CacheStorage + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            clock: Box::new(clock),
            prefix: CACHE_KEY_PREFIX.to_string(),
        }
    }

    /// Cache backed by an in-process map and the system clock.
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new(), SystemClock)
    }

    /// Cache backed by the browser's `sessionStorage`.
    #[cfg(target_arch = "wasm32")]
    pub fn session() -> Self {
        Self::new(SessionStorage, SystemClock)
    }

    /// Replace the namespace prefix applied to every key.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn into_shared(self) -> SharedCache {
        Rc::new(self)
    }

    /// Read a payload younger than `ttl`.
    ///
    /// Missing, expired, and unreadable entries all return `None`; a
    /// stale payload is never returned.
    pub fn read<P: DeserializeOwned>(&self, key: &str, ttl: Duration) -> Option<P> {
        let entry = match self.read_entry::<P>(key) {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                tracing::debug!(key, "cache miss");
                return None;
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "cache read failed, treating as miss");
                return None;
            }
        };

        if entry.key != key {
            tracing::warn!(key, stored = %entry.key, "cache entry key mismatch");
            return None;
        }

        if !entry.is_fresh(self.clock.now_ms(), ttl) {
            tracing::debug!(key, fetched_at = entry.fetched_at, "cache entry expired");
            return None;
        }

        tracing::debug!(key, "cache hit");
        Some(entry.payload)
    }

    /// Store `payload` under `key`, stamped with the current time.
    ///
    /// Unconditionally replaces any previous entry.
    pub fn write<P: Serialize>(&self, key: &str, payload: &P) -> Result<(), CacheError> {
        let entry = CacheEntry {
            key: key.to_string(),
            payload,
            fetched_at: self.clock.now_ms(),
        };
        let json = serde_json::to_string(&entry)
            .map_err(|e| CacheError::SerializationFailed(e.to_string()))?;
        self.storage.set(&self.storage_key(key), &json)
    }

    pub fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.storage.remove(&self.storage_key(key))
    }

    fn read_entry<P: DeserializeOwned>(&self, key: &str) -> Result<Option<CacheEntry<P>>, CacheError> {
        let Some(json) = self.storage.get(&self.storage_key(key))? else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| CacheError::ReadFailed(e.to_string()))
    }

    fn storage_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl std::fmt::Debug for DataCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataCache")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}
