//! Shared fixtures for the endpoint tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use twidere_api::{TwitterClient, TwitterConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CREATED_AT: &str = "Wed Aug 27 13:08:45 +0000 2008";

/// Config pointing every base URL at the mock server, uploads under `/upload/1/`.
pub fn test_config(mock_server: &MockServer) -> TwitterConfig {
    let mut config = TwitterConfig::new("test_consumer_key", "test_consumer_secret")
        .with_access_token("test_access_token", "test_access_token_secret")
        .with_api_root(&mock_server.uri());
    config.upload_base_url = format!("{}/upload/1/", mock_server.uri());
    config
}

pub fn authorized_client(mock_server: &MockServer) -> TwitterClient {
    TwitterClient::new(test_config(mock_server)).expect("client")
}

pub fn anonymous_client(mock_server: &MockServer) -> TwitterClient {
    let config = TwitterConfig::new("test_consumer_key", "test_consumer_secret")
        .with_api_root(&mock_server.uri());
    TwitterClient::new(config).expect("client")
}

/// Respond to `GET {request_path}` with `body`.
pub async fn mock_get(mock_server: &MockServer, request_path: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(request_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

/// Respond to `POST {request_path}` with `body`.
pub async fn mock_post(mock_server: &MockServer, request_path: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path(request_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

/// Query string of the only request the server received.
pub async fn single_query(mock_server: &MockServer) -> String {
    let requests = mock_server.received_requests().await.expect("recording");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0].url.query().unwrap_or_default().to_string()
}

/// Body of the only request the server received.
pub async fn single_body(mock_server: &MockServer) -> String {
    let requests = mock_server.received_requests().await.expect("recording");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    String::from_utf8_lossy(&requests[0].body).into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON fixtures
// ─────────────────────────────────────────────────────────────────────────────

pub fn user_json(id: u64, screen_name: &str) -> Value {
    json!({
        "id": id,
        "name": screen_name.to_uppercase(),
        "screen_name": screen_name,
        "followers_count": 10,
        "friends_count": 20,
        "statuses_count": 30,
        "created_at": CREATED_AT
    })
}

pub fn status_json(id: u64, text: &str) -> Value {
    json!({
        "id": id,
        "text": text,
        "created_at": CREATED_AT,
        "source": "web",
        "retweet_count": 0,
        "user": user_json(6_253_282, "twitterapi")
    })
}

pub fn list_json(id: u64, name: &str, mode: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "full_name": format!("@twitterapi/{name}"),
        "slug": name,
        "mode": mode,
        "member_count": 2,
        "subscriber_count": 1,
        "uri": format!("/twitterapi/{name}"),
        "user": user_json(6_253_282, "twitterapi")
    })
}

pub fn direct_message_json(id: u64, text: &str) -> Value {
    json!({
        "id": id,
        "text": text,
        "created_at": CREATED_AT,
        "sender_id": 1,
        "sender_screen_name": "alice",
        "recipient_id": 2,
        "recipient_screen_name": "bob"
    })
}

pub fn place_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "full_name": format!("{name}, CA"),
        "country": "United States",
        "country_code": "US",
        "place_type": "city",
        "attributes": {"street_address": "795 Folsom St"}
    })
}
