//! Shared product, analysis, and chat shapes for the price tracker front ends.
//!
//! This crate owns the wire representation used by both `client` and `cli`.
//! The backend has shipped more than one `Product` layout; the types here are
//! the single canonical shape, with serde aliases absorbing the variants.

pub mod analysis;
pub mod chat;
pub mod endpoints;
pub mod product;
pub mod track;

pub use analysis::{AnalysisResult, MatchedProduct, PriceBounds, PriceRange, QueryAnalysis, Recommendations, RecommendedProduct, SearchRequest};
pub use chat::{ChatMessage, ChatRole, Transcript};
pub use endpoints::Listing;
pub use product::{Product, ProductId};
pub use track::{TrackRequest, TrackTarget, UrlRejection};

/// Error returned when a decoded payload breaks a catalog invariant.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The payload was not valid JSON for the expected shape.
    #[error("invalid payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// The payload was JSON but not in any layout the backend uses.
    #[error("unexpected payload: {0}")]
    UnexpectedShape(&'static str),
    /// A product carried a negative or non-finite price.
    #[error("product {id} has invalid price {price}")]
    NegativePrice { id: String, price: f64 },
    /// Two products in one collection share an identifier.
    #[error("duplicate product id {0}")]
    DuplicateId(String),
}
