//! Network fetching utilities with timeout support.
//!
//! Fetches are raced against a timer; whichever finishes first decides the
//! outcome. Caching is not done here: data views go through a
//! [`FetchController`](drillboard_core::FetchController), which owns the
//! session cache.

use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_text(url, FETCH_TIMEOUT_MS).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Fetch text from a URL, failing with [`FetchError::Timeout`] after
/// `timeout_ms`.
async fn fetch_text(url: &str, timeout_ms: u32) -> Result<String, FetchError> {
    let request = Box::pin(Request::get(url).send());
    let timeout = Box::pin(TimeoutFuture::new(timeout_ms));

    let response = match future::select(request, timeout).await {
        Either::Left((result, _)) => {
            result.map_err(|e| FetchError::NetworkError(e.to_string()))?
        }
        Either::Right(_) => {
            tracing::warn!(url, timeout_ms, "request timed out");
            return Err(FetchError::Timeout);
        }
    };

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    response
        .text()
        .await
        .map_err(|_| FetchError::ResponseReadFailed)
}
