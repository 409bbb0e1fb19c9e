//! Canonical tracked-product shape.
//!
//! DESIGN
//! ======
//! Two backend revisions disagree on field names (`title`/`name`,
//! `seller`/`store`, numeric vs. string ids) and the storage layer may hand
//! back raw table rows as positional arrays. Field order below matches the
//! storage row layout, so derived `Deserialize` accepts both objects and rows.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::CatalogError;

/// Currency assumed when the backend omits one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Product identifier, unique within one fetched collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
            Unsigned(u64),
            Float(f64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Int(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
            RawId::Float(n) => Self(n.to_string()),
        })
    }
}

/// A product the backend is tracking (or has matched) for the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Empty when the backend stored no title.
    #[serde(default, alias = "title", deserialize_with = "string_or_empty")]
    pub name: String,
    /// Listed price; `None` when the backend could not extract one.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default = "default_currency", deserialize_with = "currency_or_default")]
    pub currency: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub description: String,
    #[serde(default, alias = "store", deserialize_with = "string_or_empty")]
    pub seller: String,
    #[serde(default, alias = "imageUrl", deserialize_with = "string_or_empty")]
    pub image_url: String,
    /// Capture timestamp (ISO-8601 text as produced by the backend).
    #[serde(default)]
    pub scraped_at: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub ai_recommendation: Option<String>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_owned()
}

fn currency_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|c| !c.trim().is_empty()).unwrap_or_else(default_currency))
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    /// Price to show: the live `current_price` when known, else the listed one.
    #[must_use]
    pub fn effective_price(&self) -> Option<f64> {
        self.current_price.or(self.price)
    }

    /// Price formatted as `"{currency} {amount:.2}"`.
    #[must_use]
    pub fn display_price(&self) -> String {
        match self.effective_price() {
            Some(amount) => format!("{} {amount:.2}", self.currency),
            None => "Price unavailable".to_owned(),
        }
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image_url.trim().is_empty()
    }

    /// Calendar date (`YYYY-MM-DD`) the product was captured, if known.
    #[must_use]
    pub fn added_on(&self) -> Option<&str> {
        let raw = self.scraped_at.as_deref()?.trim();
        raw.split(['T', ' ']).next().filter(|d| !d.is_empty())
    }
}

/// Decode a product collection from either `{"products": [...]}` or a bare array.
///
/// # Errors
///
/// Returns [`CatalogError::UnexpectedShape`] when the value is neither layout,
/// and [`CatalogError::Decode`] naming the offending field when an entry is malformed.
pub fn decode_product_list(value: serde_json::Value) -> Result<Vec<Product>, CatalogError> {
    let products = match value {
        serde_json::Value::Object(mut body) => body
            .remove("products")
            .ok_or(CatalogError::UnexpectedShape("object without `products`"))?,
        list @ serde_json::Value::Array(_) => list,
        _ => return Err(CatalogError::UnexpectedShape("expected a product list")),
    };
    Ok(serde_json::from_value(products)?)
}

/// Check collection invariants: non-negative prices and unique identifiers.
///
/// # Errors
///
/// Returns the first violation found, in collection order.
pub fn validate_collection(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        for price in [product.price, product.current_price].into_iter().flatten() {
            if !price.is_finite() || price < 0.0 {
                return Err(CatalogError::NegativePrice { id: product.id.to_string(), price });
            }
        }
        if !seen.insert(&product.id) {
            return Err(CatalogError::DuplicateId(product.id.to_string()));
        }
    }
    Ok(())
}
