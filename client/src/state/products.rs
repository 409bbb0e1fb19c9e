//! Product list state and card presentation.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use catalog::Product;
use catalog::product::validate_collection;

use super::view::ViewState;

pub const EMPTY_MESSAGE: &str = "No products tracked yet. Add your first product above!";
pub const NO_IMAGE_MESSAGE: &str = "No image available";

/// What the list should render right now.
#[derive(Clone, Debug, PartialEq)]
pub enum ProductsRender {
    Loading,
    Error(String),
    Empty,
    Cards(Vec<Product>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductsState {
    pub view: ViewState<Vec<Product>>,
}

impl ProductsState {
    pub fn start(&mut self) {
        self.view = ViewState::Loading;
    }

    /// Apply a fetch outcome. Collections that break the id/price invariants
    /// are reported as errors rather than rendered.
    pub fn finish(&mut self, outcome: Result<Vec<Product>, String>) {
        self.view = match outcome {
            Ok(products) => match validate_collection(&products) {
                Ok(()) => ViewState::Loaded(products),
                Err(err) => ViewState::Failed(err.to_string()),
            },
            Err(message) => ViewState::Failed(message),
        };
    }

    pub fn render(&self) -> ProductsRender {
        match &self.view {
            ViewState::Idle | ViewState::Loading => ProductsRender::Loading,
            ViewState::Failed(message) => ProductsRender::Error(message.clone()),
            ViewState::Loaded(products) if products.is_empty() => ProductsRender::Empty,
            ViewState::Loaded(products) => ProductsRender::Cards(products.clone()),
        }
    }
}

/// Display-ready fields for one product card.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductCard {
    pub key: String,
    pub title: String,
    pub image_url: Option<String>,
    pub price: String,
    pub seller: String,
    pub description: Option<String>,
    pub added: Option<String>,
    pub link: String,
    pub sentiment: Option<String>,
    pub recommendation: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_owned())
        };
        Self {
            key: product.id.to_string(),
            title: product.name.clone(),
            image_url: product.has_image().then(|| product.image_url.clone()),
            price: product.display_price(),
            seller: product.seller.clone(),
            description: non_empty(product.description.as_str()),
            added: product.added_on().map(|date| format!("Added: {date}")),
            link: product.url.clone(),
            sentiment: product.sentiment_score.map(|score| format!("Sentiment {score:.2}")),
            recommendation: product.ai_recommendation.as_deref().and_then(non_empty),
        }
    }
}
