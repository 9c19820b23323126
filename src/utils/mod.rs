//! Utility modules for web operations.
//!
//! Provides:
//! - [`fetch_json`] - Network fetching with timeout

mod fetch;

pub use fetch::fetch_json;
