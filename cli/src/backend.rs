use std::time::Duration;

use catalog::analysis::ANALYSIS_FAILED_MESSAGE;
use catalog::endpoints::{self, HEALTH, SEARCH, TRACK_PRODUCT};
use catalog::product::{decode_product_list, validate_collection};
use catalog::track::{TRACK_FAILED_MESSAGE, error_detail, validate_tracking_url};
use catalog::{AnalysisResult, Listing, Product, SearchRequest, TrackRequest};
use reqwest::Url;
use serde_json::Value;

use crate::CliError;

const HEALTH_FAILED_MESSAGE: &str = "health check failed";

/// HTTP handle on the price tracker backend.
#[derive(Debug, Clone)]
pub struct Backend {
    client: reqwest::Client,
    base_url: String,
}

impl Backend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CliError> {
        let parsed = Url::parse(base_url).map_err(|_| CliError::InvalidBaseUrl(base_url.to_owned()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url: base_url.to_owned() })
    }

    pub async fn ping(&self) -> Result<(), CliError> {
        let url = endpoints::join(&self.base_url, HEALTH);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        read_json(response, HEALTH_FAILED_MESSAGE).await.map(drop)
    }

    /// Validate `raw` and ask the backend to track it. Nothing is sent when validation fails.
    pub async fn track(&self, raw: &str) -> Result<Value, CliError> {
        let target = validate_tracking_url(raw)?;
        let body = TrackRequest::from(target);
        self.post_json(TRACK_PRODUCT, &body, TRACK_FAILED_MESSAGE).await
    }

    pub async fn list(&self, listing: Listing) -> Result<Vec<Product>, CliError> {
        let value = self.get_json(listing.path(), listing.failure_message()).await?;
        let products = decode_product_list(value)?;
        validate_collection(&products)?;
        Ok(products)
    }

    pub async fn search(&self, query: &str) -> Result<AnalysisResult, CliError> {
        let body = SearchRequest::new(query);
        let value = self.post_json(SEARCH, &body, ANALYSIS_FAILED_MESSAGE).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn get_json(&self, path: &str, fallback: &str) -> Result<Value, CliError> {
        let url = endpoints::join(&self.base_url, path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        read_json(response, fallback).await
    }

    async fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<Value, CliError> {
        let url = endpoints::join(&self.base_url, path);
        tracing::debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        read_json(response, fallback).await
    }
}

/// Decode a success body as JSON, or turn a failure status into [`CliError::Status`]
/// carrying the backend's `detail` when it sent one.
async fn read_json(response: reqwest::Response, fallback: &str) -> Result<Value, CliError> {
    let status = response.status();
    let body = response.text().await?;
    tracing::debug!(status = status.as_u16(), bytes = body.len(), "response");

    if !status.is_success() {
        let message = error_detail(&body).unwrap_or_else(|| fallback.to_owned());
        tracing::warn!(status = status.as_u16(), %message, "backend request failed");
        return Err(CliError::Status { status: status.as_u16(), message });
    }

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;
