use super::*;
use catalog::analysis::ANALYSIS_FAILED_MESSAGE;
use serde_json::json;

// =============================================================
// Query handling
// =============================================================

#[test]
fn missing_query_stays_idle_without_request() {
    let mut state = AnalysisState::default();
    assert!(state.set_query(None).is_none());
    assert!(state.set_query(Some("   ")).is_none());
    assert!(state.view.is_idle());
    assert!(state.query.is_none());
}

#[test]
fn query_issues_request_with_null_filters() {
    let mut state = AnalysisState::default();
    let request = state.set_query(Some(" ergonomic office chair ")).expect("request");
    assert_eq!(request.query, "ergonomic office chair");
    assert!(request.price_range.is_none());
    assert!(request.categories.is_none());
    assert!(state.view.is_loading());
}

#[test]
fn unchanged_query_does_not_refetch() {
    let mut state = AnalysisState::default();
    state.set_query(Some("tent")).expect("request");
    assert!(state.set_query(Some("tent")).is_none());
    assert!(state.set_query(Some("sleeping bag")).is_some());
}

#[test]
fn clearing_query_returns_to_idle() {
    let mut state = AnalysisState::default();
    state.set_query(Some("tent")).expect("request");
    state.finish(Ok(AnalysisResult::default()));
    assert!(state.set_query(None).is_none());
    assert!(state.view.is_idle());
}

#[test]
fn failure_keeps_message() {
    let mut state = AnalysisState::default();
    state.set_query(Some("tent")).expect("request");
    state.finish(Err(ANALYSIS_FAILED_MESSAGE.to_owned()));
    assert_eq!(state.view.error(), Some(ANALYSIS_FAILED_MESSAGE));
}

#[test]
fn analysis_href_encodes_query() {
    assert_eq!(analysis_href("4k tv & soundbar").as_deref(), Some("/analysis?q=4k+tv+%26+soundbar"));
    assert!(analysis_href("  ").is_none());
}

// =============================================================
// Sections
// =============================================================

#[test]
fn absent_key_features_omit_section() {
    let result: AnalysisResult = serde_json::from_value(json!({
        "query_analysis": { "category": "Tents", "price_range": "under $300" },
        "recommendations": [],
        "products": []
    }))
    .expect("decode");
    let sections = AnalysisSections::from(&result);
    assert!(sections.key_features.is_none());
    assert_eq!(sections.category, "Tents");
    assert_eq!(sections.price_range, "under $300");
}

#[test]
fn empty_analysis_uses_placeholders() {
    let sections = AnalysisSections::from(&AnalysisResult::default());
    assert_eq!(sections.category, "Not specified");
    assert_eq!(sections.price_range, "Not specified");
    assert!(sections.recommendations.is_empty());
    assert!(sections.matches.is_empty());
    assert!(sections.advisor_note.is_none());
}

#[test]
fn recommendations_and_matches_are_formatted() {
    let result: AnalysisResult = serde_json::from_value(json!({
        "query_analysis": { "key_features": ["waterproof"] },
        "recommendations": [{ "name": "Test Product 1", "price": 99.99, "rating": 4.5 }],
        "products": [{ "name": "Test Product 2", "price": 149.99, "source": "ebay" }]
    }))
    .expect("decode");
    let sections = AnalysisSections::from(&result);
    assert_eq!(sections.key_features, Some(vec!["waterproof".to_owned()]));
    assert_eq!(
        sections.recommendations,
        vec![RecommendationCard {
            name: "Test Product 1".to_owned(),
            price: "$99.99".to_owned(),
            rating: Some("4.5 / 5".to_owned()),
        }]
    );
    assert_eq!(sections.matches[0].price, "$149.99");
    assert_eq!(sections.matches[0].source.as_deref(), Some("ebay"));
}

#[test]
fn narrative_recommendation_becomes_advisor_note() {
    let result: AnalysisResult = serde_json::from_value(json!({
        "recommendations": { "recommendation": "Pick the cheaper one", "confidence_score": 0.85 }
    }))
    .expect("decode");
    let sections = AnalysisSections::from(&result);
    assert_eq!(sections.advisor_note.as_deref(), Some("Pick the cheaper one (confidence 85%)"));
    assert!(sections.recommendations.is_empty());
}
