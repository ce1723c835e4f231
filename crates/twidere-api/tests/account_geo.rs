//! Account, search, trends, geo and help endpoints against a mock server.

mod common;

use chrono::NaiveDate;
use common::{
    anonymous_client, authorized_client, mock_get, mock_post, place_json, single_body,
    single_query, status_json, user_json,
};
use serde_json::json;
use twidere_api::{
    GeoLocation, GeoQuery, ImageUpload, ProfileUpdate, Query, ResultType, TwitterError,
};
use wiremock::matchers::{body_string_contains, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ─────────────────────────────────────────────────────────────────────────────
// Account
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn rate_limit_status_without_credentials() {
    let mock_server = MockServer::start().await;
    mock_get(
        &mock_server,
        "/1/account/rate_limit_status.json",
        json!({
            "remaining_hits": 148,
            "hourly_limit": 150,
            "reset_time_in_seconds": 1_277_485_629,
            "reset_time": "Fri Jun 25 17:07:09 +0000 2010"
        }),
    )
    .await;

    let client = anonymous_client(&mock_server);
    let status = client.rate_limit_status().await.unwrap();
    assert_eq!(status.remaining_hits, 148);
    assert_eq!(status.hourly_limit, 150);
    assert_eq!(status.seconds_until_reset(), 0);
    assert!(status.reset_time.is_some());
}

#[tokio::test]
async fn update_profile_sends_only_set_fields() {
    let mock_server = MockServer::start().await;
    mock_post(&mock_server, "/1/account/update_profile.json", user_json(1, "me")).await;

    let client = authorized_client(&mock_server);
    let update = ProfileUpdate {
        location: Some("Berlin".into()),
        ..ProfileUpdate::default()
    };
    client.update_profile(&update).await.unwrap();

    let body = single_body(&mock_server).await;
    assert!(body.contains("location=Berlin"));
    assert!(!body.contains("name="));
    assert!(!body.contains("description="));
}

#[tokio::test]
async fn update_profile_image_is_multipart() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/account/update_profile_image.json"))
        .and(body_string_contains("name=\"image\""))
        .and(body_string_contains("Content-Type: image/jpeg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(1, "me")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = authorized_client(&mock_server);
    let image = ImageUpload::from_bytes("avatar.jpg", b"not really a jpeg".to_vec());
    assert_eq!(client.update_profile_image(image).await.unwrap().id, 1);
}

#[tokio::test]
async fn account_totals_and_settings_need_credentials() {
    let mock_server = MockServer::start().await;
    let client = anonymous_client(&mock_server);

    assert!(matches!(
        client.account_totals().await,
        Err(TwitterError::AuthorizationRequired)
    ));
    assert!(matches!(
        client.account_settings().await,
        Err(TwitterError::AuthorizationRequired)
    ));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn account_settings_parse() {
    let mock_server = MockServer::start().await;
    mock_get(
        &mock_server,
        "/1/account/settings.json",
        json!({
            "screen_name": "me",
            "protected": false,
            "geo_enabled": true,
            "language": "en",
            "sleep_time": {"enabled": true, "start_time": 23, "end_time": 7},
            "time_zone": {"name": "Pacific Time (US & Canada)", "utc_offset": -28800},
            "trend_location": [{"woeid": 1, "name": "Worldwide"}]
        }),
    )
    .await;

    let client = authorized_client(&mock_server);
    let settings = client.account_settings().await.unwrap();
    assert!(settings.geo_enabled);
    assert_eq!(settings.sleep_time.start_time, Some(23));
    assert_eq!(settings.trend_location[0].name, "Worldwide");
}

// ─────────────────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_uses_search_host() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", "rust lang"))
        .and(query_param("rpp", "15"))
        .and(query_param("result_type", "recent"))
        .and(query_param_is_missing("lang"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "id": 5,
                "text": "rust lang is neat",
                "created_at": "Thu, 23 Aug 2012 10:00:00 +0000",
                "from_user": "alice",
                "from_user_id": 1
            }],
            "max_id": 5,
            "since_id": 0,
            "results_per_page": 15,
            "page": 1,
            "completed_in": 0.012,
            "query": "rust+lang"
        })))
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let result = client
        .search(&Query::new("rust lang").rpp(15).result_type(ResultType::Recent))
        .await
        .unwrap();
    assert_eq!(result.results.len(), 1);
    assert_eq!(result.results[0].from_user, "alice");
}

// ─────────────────────────────────────────────────────────────────────────────
// Trends
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn daily_trends_sorted_by_slot() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/trends/daily.json"))
        .and(query_param("date", "2012-08-23"))
        .and(query_param("exclude", "hashtags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "as_of": 1_345_716_000,
            "trends": {
                "2012-08-23 11:00": [{"name": "later", "query": "later"}],
                "2012-08-23 10:00": [{"name": "earlier", "query": "earlier"}]
            }
        })))
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let date = NaiveDate::from_ymd_opt(2012, 8, 23).unwrap();
    let trends = client.daily_trends(Some(date), true).await.unwrap();
    assert_eq!(trends.len(), 2);
    assert_eq!(trends[0].trends[0].name, "earlier");
    assert!(trends[0].trend_at < trends[1].trend_at);
}

#[tokio::test]
async fn weekly_trends_without_date() {
    let mock_server = MockServer::start().await;
    mock_get(
        &mock_server,
        "/1/trends/weekly.json",
        json!({"as_of": 1_345_716_000, "trends": {"2012-08-20": [{"name": "x"}]}}),
    )
    .await;

    let client = anonymous_client(&mock_server);
    let trends = client.weekly_trends(None, false).await.unwrap();
    assert_eq!(trends.len(), 1);

    let query = single_query(&mock_server).await;
    assert!(!query.contains("date="));
    assert!(!query.contains("exclude="));
}

#[tokio::test]
async fn location_trends_and_available() {
    let mock_server = MockServer::start().await;
    mock_get(
        &mock_server,
        "/1/trends/1.json",
        json!([{
            "as_of": "2012-08-23T10:00:00Z",
            "trends": [{"name": "#rustlang", "query": "%23rustlang"}],
            "locations": [{"woeid": 1, "name": "Worldwide"}]
        }]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/1/trends/available.json"))
        .and(query_param("lat", "37.78"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "woeid": 2_487_956,
            "name": "San Francisco",
            "countryCode": "US",
            "placeType": {"code": 7, "name": "Town"}
        }])))
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let trends = client.location_trends(1).await.unwrap();
    assert_eq!(trends.trends[0].name, "#rustlang");
    assert_eq!(trends.locations[0].woeid, 1);

    let locations = client
        .available_trends(Some(GeoLocation::new(37.78, -122.39)))
        .await
        .unwrap();
    assert_eq!(locations[0].country_code.as_deref(), Some("US"));
    assert_eq!(locations[0].place_type.as_ref().unwrap().code, 7);
}

// ─────────────────────────────────────────────────────────────────────────────
// Geo
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn reverse_geocode_not_found_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/geo/reverse_geocode.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"message": "Sorry, that page does not exist", "code": 34}]
        })))
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let places = client
        .reverse_geocode(&GeoQuery::at(GeoLocation::new(0.0, 0.0)))
        .await
        .unwrap();
    assert!(places.is_empty());
}

#[tokio::test]
async fn search_places_unwraps_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/geo/search.json"))
        .and(query_param("query", "Twitter HQ"))
        .and(query_param("granularity", "poi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"places": [place_json("247f43d441defc03", "Twitter HQ")]}
        })))
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let query = GeoQuery::at(GeoLocation::new(37.78, -122.39))
        .query("Twitter HQ")
        .granularity("poi");
    let places = client.search_places(&query).await.unwrap();
    assert_eq!(places[0].street_address(), Some("795 Folsom St"));
}

#[tokio::test]
async fn similar_places_then_create() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/geo/similar_places.json"))
        .and(query_param("name", "Twitter HQ"))
        .and(query_param("attribute:street_address", "795 Folsom St"))
        .and(query_param_is_missing("contained_within"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "places": [place_json("247f43d441defc03", "Twitter HQ")],
                "token": "15d6e5ba4c3b8f2d"
            }
        })))
        .mount(&mock_server)
        .await;
    mock_post(
        &mock_server,
        "/1/geo/place.json",
        place_json("new-place", "Twitter HQ"),
    )
    .await;

    let client = authorized_client(&mock_server);
    let location = GeoLocation::new(37.78, -122.39);
    let similar = client
        .similar_places(location, "Twitter HQ", None, Some("795 Folsom St"))
        .await
        .unwrap();
    let token = similar.token.unwrap();
    assert_eq!(similar.places.len(), 1);

    let place = client
        .create_place("Twitter HQ", "5a110d312052166f", &token, location, None)
        .await
        .unwrap();
    assert_eq!(place.id, "new-place");

    let requests = mock_server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[1].body).into_owned();
    assert!(body.contains("token=15d6e5ba4c3b8f2d"));
    assert!(body.contains("contained_within=5a110d312052166f"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Help & legal
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn help_test_and_legal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/help/test.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"ok\""))
        .mount(&mock_server)
        .await;
    mock_get(&mock_server, "/1/legal/tos.json", json!({"tos": "Terms of Service"})).await;
    mock_get(&mock_server, "/1/legal/privacy.json", json!({"privacy": "Privacy Policy"})).await;

    let client = anonymous_client(&mock_server);
    assert!(client.test().await.unwrap());
    assert_eq!(client.terms_of_service().await.unwrap(), "Terms of Service");
    assert_eq!(client.privacy_policy().await.unwrap(), "Privacy Policy");
}

#[tokio::test]
async fn legal_missing_field_is_unexpected() {
    let mock_server = MockServer::start().await;
    mock_get(&mock_server, "/1/legal/tos.json", json!({})).await;

    let client = anonymous_client(&mock_server);
    let err = client.terms_of_service().await.unwrap_err();
    assert!(matches!(err, TwitterError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn related_results_grouped() {
    let mock_server = MockServer::start().await;
    mock_get(
        &mock_server,
        "/1/related_results/show/20.json",
        json!([
            {"groupName": "TweetsWithConversation", "results": [
                {"kind": "Tweet", "value": status_json(19, "question")},
                {"kind": "Tweet", "value": status_json(21, "answer")}
            ]},
            {"groupName": "TweetsFromUser", "results": [
                {"kind": "Tweet", "value": status_json(18, "earlier")}
            ]}
        ]),
    )
    .await;

    let client = authorized_client(&mock_server);
    let related = client.related_results(20).await.unwrap();
    assert_eq!(related.tweets_with_conversation.len(), 2);
    assert_eq!(related.tweets_from_user[0].id, 18);
    assert!(related.tweets_with_reply.is_empty());
}
