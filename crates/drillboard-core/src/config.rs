//! Core configuration constants.

use std::time::Duration;

// =============================================================================
// Navigation
// =============================================================================

/// Key of the synthetic root breadcrumb entry.
pub const ROOT_KEY: &str = "root";

/// Label of the synthetic root breadcrumb entry.
pub const ROOT_LABEL: &str = "All";

/// Payload field used by [`DrillClickAdapter`](crate::DrillClickAdapter)
/// when no field is configured.
pub const DEFAULT_DRILL_FIELD: &str = "name";

// =============================================================================
// Cache
// =============================================================================

/// Default time-to-live for cached payloads.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Prefix prepended to every cache key in the storage backend.
pub const CACHE_KEY_PREFIX: &str = "drillboard.cache.";
