use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("/api/search"), format!("{}/api/search", api_base().trim_end_matches('/')));
}

#[test]
fn listing_endpoints_resolve_against_base() {
    assert!(endpoint(Listing::Tracked.path()).ends_with("/api/tracked-products"));
    assert!(endpoint(Listing::Catalog.path()).ends_with("/api/products"));
}

#[test]
fn status_error_extracts_detail() {
    assert_eq!(
        status_error(400, r#"{"detail":"X"}"#),
        ApiError::Status { status: 400, detail: Some("X".to_owned()) }
    );
    assert_eq!(status_error(502, "Bad Gateway"), ApiError::Status { status: 502, detail: None });
}

#[test]
fn user_message_prefers_server_detail() {
    let err = status_error(422, r#"{"detail":"URL is not a product page"}"#);
    assert_eq!(err.user_message("Failed to track product"), "URL is not a product page");
}

#[test]
fn user_message_falls_back_for_bare_status() {
    let err = status_error(500, "");
    assert_eq!(err.user_message("Failed to fetch products"), "Failed to fetch products");
}

#[test]
fn user_message_surfaces_transport_text() {
    let err = ApiError::Transport("TypeError: Failed to fetch".to_owned());
    assert_eq!(err.user_message("generic"), "TypeError: Failed to fetch");
    assert_eq!(ApiError::Transport(String::new()).user_message("generic"), "generic");
}

#[test]
fn native_stub_reports_unavailable() {
    assert_eq!(ApiError::Unavailable.user_message("generic"), "not available outside the browser");
}
