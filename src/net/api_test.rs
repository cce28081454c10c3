use super::*;

// =============================================================
// Base origin handling
// =============================================================

#[test]
fn new_trims_trailing_slash_before_joining() {
    let client = ApiClient::new("http://localhost:8000/");
    assert_eq!(client.base_url(), "http://localhost:8000");
    assert_eq!(client.endpoint_url("/auth/login"), "http://localhost:8000/auth/login");
}

#[test]
fn from_env_defaults_to_local_dev_server() {
    let client = ApiClient::from_env();
    assert_eq!(client.endpoint_url("/auth/login"), "http://localhost:8000/auth/login");
}

// =============================================================
// Header merging
// =============================================================

#[test]
fn merge_headers_defaults_to_json_content_type() {
    let merged = merge_headers(&[]);
    assert_eq!(merged, vec![("Content-Type".to_owned(), "application/json".to_owned())]);
}

#[test]
fn merge_headers_lets_callers_override_content_type() {
    let caller = vec![("content-type".to_owned(), "text/plain".to_owned())];
    let merged = merge_headers(&caller);
    assert_eq!(merged, vec![("content-type".to_owned(), "text/plain".to_owned())]);
}

#[test]
fn merge_headers_keeps_unrelated_caller_headers() {
    let caller = vec![("Authorization".to_owned(), "Bearer t".to_owned())];
    let merged = merge_headers(&caller);
    assert!(merged.contains(&("Content-Type".to_owned(), "application/json".to_owned())));
    assert!(merged.contains(&("Authorization".to_owned(), "Bearer t".to_owned())));
    assert_eq!(merged.len(), 2);
}

// =============================================================
// Form encoding
// =============================================================

#[test]
fn login_form_body_renames_email_and_percent_encodes() {
    assert_eq!(login_form_body("a@b.com", "p"), "username=a%40b.com&password=p");
}

#[test]
fn encode_form_uses_plus_for_spaces() {
    assert_eq!(encode_form(&[("q", "a b")]), "q=a+b");
}

#[test]
fn encode_form_preserves_unreserved_characters() {
    assert_eq!(encode_form(&[("k", "Az9*-._")]), "k=Az9*-._");
}

#[test]
fn encode_form_percent_encodes_reserved_characters() {
    assert_eq!(encode_form(&[("password", "p&=s")]), "password=p%26%3Ds");
}

// =============================================================
// Body classification
// =============================================================

#[test]
fn classify_body_empty_is_no_content() {
    assert_eq!(classify_body(""), Ok(JsonBody::Empty));
}

#[test]
fn classify_body_parses_json_value() {
    let parsed = classify_body("{\"access_token\":\"t\"}");
    assert_eq!(parsed, Ok(JsonBody::Value(serde_json::json!({ "access_token": "t" }))));
}

#[test]
fn classify_body_rejects_invalid_json() {
    assert!(classify_body("<html>oops</html>").is_err());
}

// =============================================================
// Error extraction
// =============================================================

#[test]
fn extract_error_message_prefers_detail_field() {
    let message = extract_error_message(401, "{\"detail\":\"Invalid credentials\"}", login_failed_message);
    assert_eq!(message, "Invalid credentials");
}

#[test]
fn extract_error_message_falls_back_on_non_json_body() {
    let message = extract_error_message(500, "<html>oops</html>", request_failed_message);
    assert_eq!(message, "request failed: 500");
}

#[test]
fn extract_error_message_falls_back_on_missing_detail() {
    let message = extract_error_message(502, "{}", login_failed_message);
    assert_eq!(message, "login failed: 502");
}

#[test]
fn success_range_is_2xx_only() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(is_success(299));
    assert!(!is_success(199));
    assert!(!is_success(301));
    assert!(!is_success(401));
    assert!(!is_success(500));
}
