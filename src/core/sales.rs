//! Sales data source.
//!
//! Each [`SalesScope`] maps to one static JSON document under
//! [`DATA_BASE_URL`].

use crate::config::DATA_BASE_URL;
use crate::core::error::FetchError;
use crate::models::{SalesScope, Segment, StoreRow};
use crate::utils::fetch_json;

/// Full URL of a scope's document.
pub fn scope_url(scope: &SalesScope) -> String {
    format!("{}/{}", DATA_BASE_URL.trim_end_matches('/'), scope.path())
}

/// Breakdown of a region-level or city-level scope.
pub async fn fetch_segments(scope: SalesScope) -> Result<Vec<Segment>, FetchError> {
    fetch_json(&scope_url(&scope)).await
}

/// Store listing of a city.
pub async fn fetch_stores(scope: SalesScope) -> Result<Vec<StoreRow>, FetchError> {
    fetch_json(&scope_url(&scope)).await
}
