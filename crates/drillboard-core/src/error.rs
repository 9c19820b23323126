//! Error types for the cache and drill-down layers.
//!
//! Neither is surfaced to end users directly: cache errors are logged and
//! treated as misses, and drill errors only arise while deriving a
//! [`DrillItem`](crate::DrillItem) from an untyped payload.

use thiserror::Error;

/// Cache storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// The storage backend is not available (e.g. storage disabled).
    #[error("cache storage not available")]
    StorageUnavailable,
    /// Failed to serialize the entry to JSON.
    #[error("failed to serialize cache entry: {0}")]
    SerializationFailed(String),
    /// The backend rejected a read, or the stored entry is unparseable.
    #[error("failed to read cache entry: {0}")]
    ReadFailed(String),
    /// The backend rejected a write (quota exceeded, etc.).
    #[error("failed to write cache entry: {0}")]
    WriteFailed(String),
}

/// Errors deriving a drill item from a selection payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrillError {
    /// Payload is not a JSON object.
    #[error("selection payload is not an object")]
    NotAnObject,
    /// No key could be derived from the configured field or `id`.
    #[error("selection payload has no `{field}` or `id` field")]
    MissingKey { field: String },
}
