//! Product-URL validation and the `POST /api/track-product` body.

#[cfg(test)]
#[path = "track_test.rs"]
mod track_test;

use serde::{Deserialize, Serialize};
use url::Url;

/// Shown when the backend fails without a usable `detail`.
pub const TRACK_FAILED_MESSAGE: &str = "Failed to track product";
/// Shown after a successful track when the backend does not name the product.
pub const TRACK_SUCCESS_MESSAGE: &str = "Product tracked successfully!";

/// Why a product URL was refused before any request was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlRejection {
    #[error("Please enter a product URL")]
    Empty,
    #[error("Please enter a valid URL starting with http:// or https://")]
    Invalid,
}

/// A validated product listing URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackTarget {
    pub url: String,
    /// Hostname of the listing, e.g. `www.amazon.com`.
    pub website: String,
}

/// Validate raw input as an absolute `http`/`https` URL with a host.
///
/// # Errors
///
/// Returns [`UrlRejection::Empty`] for blank input and
/// [`UrlRejection::Invalid`] for anything that is not an absolute web URL.
pub fn validate_tracking_url(raw: &str) -> Result<TrackTarget, UrlRejection> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlRejection::Empty);
    }

    // `Url::parse` repairs `http:example.com`; require the literal prefix.
    let lower = trimmed.to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return Err(UrlRejection::Invalid);
    }

    let parsed = Url::parse(trimmed).map_err(|_| UrlRejection::Invalid)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(UrlRejection::Invalid);
    }
    let website = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(UrlRejection::Invalid)?
        .to_owned();

    Ok(TrackTarget { url: trimmed.to_owned(), website })
}

/// Body for `POST /api/track-product`.
///
/// `name`, `price`, and `description` are placeholders the backend replaces
/// with scraped values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackRequest {
    pub url: String,
    pub website: String,
    pub notify: bool,
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl From<TrackTarget> for TrackRequest {
    fn from(target: TrackTarget) -> Self {
        Self {
            url: target.url,
            website: target.website,
            notify: true,
            name: String::new(),
            price: 0.0,
            description: String::new(),
        }
    }
}

/// Extract a human-readable `detail` from a JSON error body.
///
/// Plain `{"detail": "..."}` bodies yield the string; validation bodies
/// (`{"detail": [{"msg": "..."}]}`) yield the first message.
#[must_use]
pub fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?;
    let text = match detail {
        serde_json::Value::String(s) => s.as_str(),
        serde_json::Value::Array(items) => items.first()?.get("msg")?.as_str()?,
        _ => return None,
    };
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

/// Error string to surface for a failed track request.
#[must_use]
pub fn failure_message(body: &str) -> String {
    error_detail(body).unwrap_or_else(|| TRACK_FAILED_MESSAGE.to_owned())
}

/// Name of the tracked product, when the success body echoes it back
/// (`{"product": {"title": ..}}` or a bare product object).
#[must_use]
pub fn tracked_name(response: &serde_json::Value) -> Option<&str> {
    let product = response.get("product").unwrap_or(response);
    product
        .get("title")
        .or_else(|| product.get("name"))
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Notice to show after a successful track.
#[must_use]
pub fn success_notice(response: &serde_json::Value) -> String {
    tracked_name(response).map_or_else(|| TRACK_SUCCESS_MESSAGE.to_owned(), |name| format!("Now tracking {name}"))
}
