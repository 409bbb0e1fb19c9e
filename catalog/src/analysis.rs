//! Query analysis request/response shapes for `POST /api/search`.
//!
//! Every nested field is optional: the backend fills these from model output,
//! so a partial or oddly-typed answer must still decode and render.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Shown when a search fails without a usable `detail`.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze products";

/// Placeholder for analysis fields the backend left empty.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Numeric price filter (`{"min": .., "max": ..}`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Search body. Filters are part of the shape but never set by the views,
/// so they go over the wire as explicit `null`s.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub price_range: Option<PriceBounds>,
    pub categories: Option<Vec<String>>,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), price_range: None, categories: None }
    }
}

/// Price range inferred from the query: free text, bounds, or anything else.
///
/// Only objects whose keys are `min`/`max`, with at least one numeric bound,
/// decode as `Bounds`; other objects are kept verbatim as `Other`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PriceRange {
    Text(String),
    Bounds(PriceBounds),
    Other(serde_json::Value),
}

impl<'de> Deserialize<'de> for PriceRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(text) => Self::Text(text),
            serde_json::Value::Object(map) => match bounds_from(&map) {
                Some(bounds) => Self::Bounds(bounds),
                None => Self::Other(serde_json::Value::Object(map)),
            },
            other => Self::Other(other),
        })
    }
}

fn bounds_from(map: &serde_json::Map<String, serde_json::Value>) -> Option<PriceBounds> {
    if map.keys().any(|k| k != "min" && k != "max") {
        return None;
    }
    let bound = |key: &str| -> Result<Option<f64>, ()> {
        match map.get(key) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::Number(n)) => Ok(n.as_f64()),
            Some(_) => Err(()),
        }
    };
    let bounds = PriceBounds { min: bound("min").ok()?, max: bound("max").ok()? };
    (bounds.min.is_some() || bounds.max.is_some()).then_some(bounds)
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) if text.trim().is_empty() => f.write_str(NOT_SPECIFIED),
            Self::Text(text) => f.write_str(text.trim()),
            Self::Bounds(PriceBounds { min: Some(min), max: Some(max) }) => write!(f, "{min:.2} - {max:.2}"),
            Self::Bounds(PriceBounds { min: Some(min), max: None }) => write!(f, "from {min:.2}"),
            Self::Bounds(PriceBounds { min: None, max: Some(max) }) => write!(f, "up to {max:.2}"),
            Self::Bounds(PriceBounds { min: None, max: None }) => f.write_str(NOT_SPECIFIED),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Summary derived from the user's query.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    #[serde(default, alias = "main_category", deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub key_features: Option<Vec<String>>,
}

impl QueryAnalysis {
    #[must_use]
    pub fn category_label(&self) -> String {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(NOT_SPECIFIED)
            .to_owned()
    }

    #[must_use]
    pub fn price_range_label(&self) -> String {
        self.price_range
            .as_ref()
            .map_or_else(|| NOT_SPECIFIED.to_owned(), ToString::to_string)
    }

    /// Non-empty key features, or `None` when the section should be omitted.
    #[must_use]
    pub fn key_features(&self) -> Option<&[String]> {
        self.key_features.as_deref().filter(|features| !features.is_empty())
    }
}

/// A product the backend recommends for the query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendedProduct {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: Option<f64>,
}

/// Free-text advice returned instead of a product list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdvisorNote {
    pub recommendation: String,
    #[serde(default)]
    pub confidence_score: Option<f64>,
}

/// Recommendations arrive either as product cards or as one narrative note.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recommendations {
    Products(Vec<RecommendedProduct>),
    Narrative(AdvisorNote),
}

impl Default for Recommendations {
    fn default() -> Self {
        Self::Products(Vec::new())
    }
}

impl Recommendations {
    #[must_use]
    pub fn products(&self) -> &[RecommendedProduct] {
        match self {
            Self::Products(products) => products,
            Self::Narrative(_) => &[],
        }
    }

    #[must_use]
    pub fn note(&self) -> Option<&AdvisorNote> {
        match self {
            Self::Narrative(note) => Some(note),
            Self::Products(_) => None,
        }
    }
}

/// A product matched for the query, as scraped from a store listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchedProduct {
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Full search response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub query_analysis: QueryAnalysis,
    #[serde(default)]
    pub recommendations: Recommendations,
    #[serde(default)]
    pub products: Vec<MatchedProduct>,
}

/// Format an optional amount as `"$12.50"`, or a dash when unknown.
#[must_use]
pub fn format_amount(amount: Option<f64>) -> String {
    amount.map_or_else(|| "-".to_owned(), |a| format!("${a:.2}"))
}

/// Keep a string; anything else (lists, numbers, objects) reads as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(text)) => Some(text),
        _ => None,
    })
}

/// Accept a list of strings or one comma-separated string. Non-string list
/// items are dropped.
fn lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(text) => Some(text),
                    _ => None,
                })
                .collect(),
        ),
        Some(serde_json::Value::String(text)) => Some(
            text.split(',').map(str::trim).filter(|f| !f.is_empty()).map(str::to_owned).collect(),
        ),
        _ => None,
    })
}

/// Accept JSON numbers or scraped text such as `"$1,299.00"` / `"4.5 out of 5 stars"`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => parse_leading_number(&s),
        _ => None,
    })
}

fn parse_leading_number(text: &str) -> Option<f64> {
    let digits: String = text
        .trim()
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .filter(|c| *c != ',')
        .collect();
    digits.trim_end_matches('.').parse().ok()
}
