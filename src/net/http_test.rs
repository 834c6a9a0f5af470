use super::*;
use reqwest::header::AUTHORIZATION;

fn client_with(tokens: &TokenStore) -> HttpClient {
    HttpClient::new("http://localhost:8000/", tokens.clone()).unwrap()
}

#[test]
fn url_joins_base_and_path() {
    let client = client_with(&TokenStore::in_memory());
    assert_eq!(client.base_url(), "http://localhost:8000");
    assert_eq!(client.url("/api/accounts"), "http://localhost:8000/api/accounts");
    assert_eq!(client.url("api/guides"), "http://localhost:8000/api/guides");
}

#[test]
fn request_without_token_has_no_authorization() {
    let tokens = TokenStore::in_memory();
    let request = client_with(&tokens).request(Method::GET, "/api/accounts").unwrap().build().unwrap();
    assert!(request.headers().get(AUTHORIZATION).is_none());
}

#[test]
fn request_with_token_carries_bearer() {
    let tokens = TokenStore::in_memory();
    tokens.set_token("tok-1").unwrap();
    let request = client_with(&tokens).request(Method::GET, "/api/accounts").unwrap().build().unwrap();
    assert_eq!(request.headers().get(AUTHORIZATION).unwrap(), "Bearer tok-1");
}

#[test]
fn token_is_read_at_call_time() {
    let tokens = TokenStore::in_memory();
    let client = client_with(&tokens);

    let before = client.request(Method::GET, "/api/auth/me").unwrap().build().unwrap();
    assert!(before.headers().get(AUTHORIZATION).is_none());

    tokens.set_token("fresh").unwrap();
    let during = client.request(Method::GET, "/api/auth/me").unwrap().build().unwrap();
    assert_eq!(during.headers().get(AUTHORIZATION).unwrap(), "Bearer fresh");

    tokens.remove_token().unwrap();
    let after = client.request(Method::GET, "/api/auth/me").unwrap().build().unwrap();
    assert!(after.headers().get(AUTHORIZATION).is_none());
}

#[test]
fn error_message_prefers_detail_string() {
    assert_eq!(error_message(r#"{"detail":"Account not found"}"#), "Account not found");
}

#[test]
fn error_message_renders_structured_detail() {
    let message = error_message(r#"{"detail":[{"loc":["body","email"],"msg":"invalid"}]}"#);
    assert!(message.contains("invalid"));
}

#[test]
fn error_message_falls_back_to_raw_text() {
    assert_eq!(error_message("Internal Server Error"), "Internal Server Error");
    assert_eq!(error_message(r#"{"error":"boom"}"#), r#"{"error":"boom"}"#);
    assert_eq!(error_message("  "), "empty response");
}

#[test]
fn decode_body_treats_empty_as_null() {
    decode_body::<()>("").unwrap();
    assert_eq!(decode_body::<Option<u32>>(" ").unwrap(), None);
    assert_eq!(decode_body::<u32>("7").unwrap(), 7);
}
