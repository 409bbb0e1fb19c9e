//! Backend route paths and URL joining.

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

pub const HEALTH: &str = "/";
pub const TRACK_PRODUCT: &str = "/api/track-product";
pub const TRACKED_PRODUCTS: &str = "/api/tracked-products";
/// Older listing route with the `store`/`current_price` product variant.
pub const PRODUCTS: &str = "/api/products";
pub const SEARCH: &str = "/api/search";

/// Which product listing to read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Listing {
    /// `GET /api/tracked-products`
    #[default]
    Tracked,
    /// `GET /api/products`
    Catalog,
}

impl Listing {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Tracked => TRACKED_PRODUCTS,
            Self::Catalog => PRODUCTS,
        }
    }

    /// Generic message shown when the fetch fails without a better one.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Tracked => "Failed to fetch products",
            Self::Catalog => "Failed to load products",
        }
    }
}

/// Join a base URL and an absolute route path without doubling slashes.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
