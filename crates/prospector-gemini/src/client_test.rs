use super::*;

#[test]
fn endpoint_url_appends_model_path() {
    let url = GeminiClient::endpoint_url("https://generativelanguage.googleapis.com", "gemini-2.5-flash")
        .expect("valid endpoint");
    assert_eq!(
        url.as_str(),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
    );
}

#[test]
fn endpoint_url_keeps_base_path_prefix() {
    let url = GeminiClient::endpoint_url("http://localhost:8080/proxy/", "gemini-test")
        .expect("valid endpoint");
    assert_eq!(
        url.as_str(),
        "http://localhost:8080/proxy/v1beta/models/gemini-test:generateContent"
    );
}

#[test]
fn endpoint_url_rejects_garbage_base() {
    let err = GeminiClient::endpoint_url("not a url", "gemini-test").unwrap_err();
    assert!(matches!(err, GeminiError::InvalidBaseUrl { .. }));
}

#[test]
fn api_error_message_reads_error_envelope() {
    let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
    assert_eq!(GeminiClient::api_error_message(body), "API key not valid.");
}

#[test]
fn api_error_message_falls_back_to_truncated_body() {
    let body = "x".repeat(1_000);
    assert_eq!(
        GeminiClient::api_error_message(&body).len(),
        ERROR_BODY_PREVIEW_CHARS
    );
}
