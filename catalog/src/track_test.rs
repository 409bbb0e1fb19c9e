use super::*;

// =============================================================
// URL validation
// =============================================================

#[test]
fn accepts_http_and_https_urls_and_extracts_host() {
    let target = validate_tracking_url("https://www.amazon.com/dp/B0CL5KNB9M").expect("valid");
    assert_eq!(target.website, "www.amazon.com");
    assert_eq!(target.url, "https://www.amazon.com/dp/B0CL5KNB9M");

    let plain = validate_tracking_url("http://shop.test:8080/item?id=3").expect("valid");
    assert_eq!(plain.website, "shop.test");
}

#[test]
fn trims_surrounding_whitespace() {
    let target = validate_tracking_url("  https://ebay.com/itm/1  ").expect("valid");
    assert_eq!(target.url, "https://ebay.com/itm/1");
}

#[test]
fn rejects_blank_input() {
    assert_eq!(validate_tracking_url(""), Err(UrlRejection::Empty));
    assert_eq!(validate_tracking_url("   "), Err(UrlRejection::Empty));
}

#[test]
fn rejects_inputs_without_web_scheme_prefix() {
    for raw in [
        "amazon.com/dp/1",
        "www.amazon.com",
        "ftp://files.test/a",
        "mailto:someone@example.com",
        "http:example.com",
        "javascript:alert(1)",
        "just some words",
    ] {
        assert_eq!(validate_tracking_url(raw), Err(UrlRejection::Invalid), "input {raw:?}");
    }
}

#[test]
fn rejects_unparsable_urls_with_prefix() {
    assert_eq!(validate_tracking_url("http://"), Err(UrlRejection::Invalid));
    assert_eq!(validate_tracking_url("https://exa mple.com"), Err(UrlRejection::Invalid));
}

#[test]
fn rejection_messages_are_user_facing() {
    assert_eq!(UrlRejection::Empty.to_string(), "Please enter a product URL");
    assert!(UrlRejection::Invalid.to_string().contains("http://"));
}

// =============================================================
// Request body
// =============================================================

#[test]
fn track_request_carries_url_host_and_placeholders() {
    let target = validate_tracking_url("https://bestbuy.com/site/tv").expect("valid");
    let body = serde_json::to_value(TrackRequest::from(target)).expect("encode");
    assert_eq!(
        body,
        serde_json::json!({
            "url": "https://bestbuy.com/site/tv",
            "website": "bestbuy.com",
            "notify": true,
            "name": "",
            "price": 0.0,
            "description": ""
        })
    );
}

// =============================================================
// Error detail extraction
// =============================================================

#[test]
fn detail_string_is_returned_verbatim() {
    assert_eq!(error_detail(r#"{"detail":"X"}"#), Some("X".to_owned()));
    assert_eq!(failure_message(r#"{"detail":"Product already tracked"}"#), "Product already tracked");
}

#[test]
fn validation_detail_uses_first_message() {
    let body = r#"{"detail":[{"loc":["body","url"],"msg":"field required","type":"value_error.missing"}]}"#;
    assert_eq!(error_detail(body), Some("field required".to_owned()));
}

#[test]
fn missing_or_unparsable_detail_falls_back_to_generic() {
    assert_eq!(failure_message(""), TRACK_FAILED_MESSAGE);
    assert_eq!(failure_message("<html>502 Bad Gateway</html>"), TRACK_FAILED_MESSAGE);
    assert_eq!(failure_message(r#"{"error":"nope"}"#), TRACK_FAILED_MESSAGE);
    assert_eq!(failure_message(r#"{"detail":"   "}"#), TRACK_FAILED_MESSAGE);
    assert_eq!(failure_message(r#"{"detail":42}"#), TRACK_FAILED_MESSAGE);
}

// =============================================================
// Success notice
// =============================================================

#[test]
fn success_notice_names_the_returned_product() {
    use serde_json::json;
    assert_eq!(success_notice(&json!({"product": {"title": "Desk Lamp"}})), "Now tracking Desk Lamp");
    assert_eq!(success_notice(&json!({"name": " Kettle "})), "Now tracking Kettle");
    assert_eq!(success_notice(&json!({"product": {"title": "  "}})), TRACK_SUCCESS_MESSAGE);
    assert_eq!(success_notice(&json!({"message": "ok"})), TRACK_SUCCESS_MESSAGE);
    assert_eq!(success_notice(&serde_json::Value::Null), TRACK_SUCCESS_MESSAGE);
}
