//! Analysis-result state and section layout.
//!
//! The view is driven by an optional query. Without one it stays `Idle` and
//! renders a prompt instead of waiting forever on a request never sent.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use catalog::analysis::format_amount;
use catalog::{AnalysisResult, SearchRequest};

use super::view::ViewState;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisState {
    pub query: Option<String>,
    pub view: ViewState<AnalysisResult>,
}

impl AnalysisState {
    /// Point the view at a new query.
    ///
    /// Returns the request to send, or `None` when the query is blank or
    /// unchanged.
    pub fn set_query(&mut self, query: Option<&str>) -> Option<SearchRequest> {
        let query = query.map(str::trim).filter(|q| !q.is_empty()).map(str::to_owned);
        if query == self.query && !self.view.is_idle() {
            return None;
        }
        self.query.clone_from(&query);
        let Some(query) = query else {
            self.view = ViewState::Idle;
            return None;
        };
        self.view = ViewState::Loading;
        Some(SearchRequest::new(query))
    }

    pub fn finish(&mut self, outcome: Result<AnalysisResult, String>) {
        self.view = outcome.into();
    }
}

/// Route to the analysis page for a query, URL-encoded.
pub fn analysis_href(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    Some(format!("/analysis?q={encoded}"))
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecommendationCard {
    pub name: String,
    pub price: String,
    pub rating: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatchCard {
    pub name: String,
    pub price: String,
    pub source: Option<String>,
    pub url: Option<String>,
}

/// Display-ready sections for a loaded analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisSections {
    pub category: String,
    pub price_range: String,
    /// `None` means the key-features section is not rendered at all.
    pub key_features: Option<Vec<String>>,
    pub recommendations: Vec<RecommendationCard>,
    pub advisor_note: Option<String>,
    pub matches: Vec<MatchCard>,
}

impl From<&AnalysisResult> for AnalysisSections {
    fn from(result: &AnalysisResult) -> Self {
        let analysis = &result.query_analysis;
        Self {
            category: analysis.category_label(),
            price_range: analysis.price_range_label(),
            key_features: analysis.key_features().map(<[String]>::to_vec),
            recommendations: result
                .recommendations
                .products()
                .iter()
                .map(|r| RecommendationCard {
                    name: r.name.clone(),
                    price: format_amount(r.price),
                    rating: r.rating.map(|rating| format!("{rating:.1} / 5")),
                })
                .collect(),
            advisor_note: result.recommendations.note().map(|note| match note.confidence_score {
                Some(score) => format!("{} (confidence {:.0}%)", note.recommendation, score * 100.0),
                None => note.recommendation.clone(),
            }),
            matches: result
                .products
                .iter()
                .map(|p| MatchCard {
                    name: p.name.clone(),
                    price: format_amount(p.price),
                    source: p.source.clone(),
                    url: p.url.clone(),
                })
                .collect(),
        }
    }
}
