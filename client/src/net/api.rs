//! REST API helpers for communicating with the backend.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only reachable from the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; views turn the error into an
//! inline message with [`ApiError::user_message`] and never propagate it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::endpoints;
use catalog::{AnalysisResult, Listing, Product, SearchRequest, TrackRequest};

/// Backend failure as seen by a view.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (network down, CORS, aborted).
    #[error("{0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16, detail: Option<String> },
    /// The body did not match the expected shape.
    #[error("{0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Inline message for the view: a server `detail` when present, the
    /// underlying message for transport/decode failures, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            Self::Status { detail: None, .. } => fallback.to_owned(),
            Self::Transport(message) | Self::Decode(message) if !message.trim().is_empty() => message.clone(),
            Self::Transport(_) | Self::Decode(_) => fallback.to_owned(),
            Self::Unavailable => self.to_string(),
        }
    }
}

/// Base URL of the backend, fixed at build time.
pub fn api_base() -> &'static str {
    option_env!("PRICE_TRACKER_API_BASE").unwrap_or(endpoints::DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(path: &str) -> String {
    endpoints::join(api_base(), path)
}

#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::Status { status, detail: catalog::track::error_detail(body) }
}

#[cfg(feature = "csr")]
async fn failure(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    leptos::logging::warn!("backend request failed: {} {status}", resp.url());
    status_error(status, &body)
}

/// Ask the backend to start tracking a product via `POST /api/track-product`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn track_product(body: &TrackRequest) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(endpoints::TRACK_PRODUCT))
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        // Success bodies are free-form; an empty body still counts.
        Ok(resp.json::<serde_json::Value>().await.unwrap_or(serde_json::Value::Null))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = body;
        Err(ApiError::Unavailable)
    }
}

/// Fetch a product collection from the listing `source`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not a product list.
pub async fn fetch_products(source: Listing) -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(source.path()))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        let body: serde_json::Value = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        catalog::product::decode_product_list(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = source;
        Err(ApiError::Unavailable)
    }
}

/// Run query analysis via `POST /api/search`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body cannot be decoded.
pub async fn search(request: &SearchRequest) -> Result<AnalysisResult, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(endpoints::SEARCH))
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        resp.json::<AnalysisResult>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
