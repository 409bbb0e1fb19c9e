use super::*;
use catalog::track::TRACK_SUCCESS_MESSAGE;
use serde_json::json;

fn with_input(input: &str) -> TrackFormState {
    TrackFormState { input: input.to_owned(), ..TrackFormState::default() }
}

#[test]
fn invalid_input_sets_error_and_yields_no_request() {
    for raw in ["", "   ", "amazon.com/item", "ftp://x.test/a"] {
        let mut form = with_input(raw);
        assert!(form.begin_submit().is_none(), "input {raw:?}");
        assert!(!form.busy);
        assert!(form.error.is_some());
        assert_eq!(form.input, raw);
    }
}

#[test]
fn valid_input_enters_busy_and_builds_request() {
    let mut form = with_input("https://www.walmart.com/ip/123");
    let request = form.begin_submit().expect("request");
    assert!(form.busy);
    assert!(form.error.is_none());
    assert_eq!(request.website, "www.walmart.com");
    assert_eq!(request.url, "https://www.walmart.com/ip/123");
}

#[test]
fn busy_form_refuses_resubmission() {
    let mut form = with_input("https://www.walmart.com/ip/123");
    assert!(form.begin_submit().is_some());
    assert!(form.begin_submit().is_none());
    assert!(form.busy);
}

#[test]
fn success_clears_input_and_error() {
    let mut form = with_input("https://ebay.com/itm/9");
    form.error = Some("stale".to_owned());
    form.begin_submit().expect("request");
    form.finish_success(&json!({ "ok": true }));
    assert!(form.input.is_empty());
    assert!(form.error.is_none());
    assert!(!form.busy);
    assert_eq!(form.notice.as_deref(), Some(TRACK_SUCCESS_MESSAGE));
}

#[test]
fn success_notice_names_echoed_product() {
    let mut form = with_input("https://ebay.com/itm/9");
    form.begin_submit().expect("request");
    form.finish_success(&json!({ "message": "added", "product": { "title": "PlayStation 5 Slim" } }));
    assert_eq!(form.notice.as_deref(), Some("Now tracking PlayStation 5 Slim"));
}

#[test]
fn failure_surfaces_message_and_returns_to_idle() {
    let mut form = with_input("https://ebay.com/itm/9");
    form.begin_submit().expect("request");
    form.finish_failure(catalog::track::failure_message(r#"{"detail":"X"}"#));
    assert_eq!(form.error.as_deref(), Some("X"));
    assert!(!form.busy);
    assert_eq!(form.input, "https://ebay.com/itm/9");
    assert!(form.begin_submit().is_some());
}
