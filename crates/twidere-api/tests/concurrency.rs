//! One client shared by concurrent tasks.

mod common;

use common::{authorized_client, mock_get, status_json, user_json};
use serde_json::json;
use twidere_api::{ApiMonitor, Paging, TwitterClient, UserRef};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn client_is_send_and_sync() {
    assert_send_sync::<TwitterClient>();
    assert_send_sync::<ApiMonitor>();
}

#[tokio::test]
async fn joined_calls_share_one_client() {
    let mock_server = MockServer::start().await;
    mock_get(
        &mock_server,
        "/1/statuses/home_timeline.json",
        json!([status_json(2, "b"), status_json(1, "a")]),
    )
    .await;
    mock_get(&mock_server, "/1/users/show.json", user_json(1, "alice")).await;
    mock_get(
        &mock_server,
        "/1/account/rate_limit_status.json",
        json!({"remaining_hits": 149, "hourly_limit": 150, "reset_time_in_seconds": 0}),
    )
    .await;

    let client = authorized_client(&mock_server);
    let other = client.clone();

    let alice = UserRef::from("alice");
    let (home, user, limit) = tokio::join!(
        client.home_timeline(Paging::new()),
        other.show_user(&alice),
        client.rate_limit_status(),
    );

    assert_eq!(home.unwrap().len(), 2);
    assert_eq!(user.unwrap().screen_name, "alice");
    assert_eq!(limit.unwrap().remaining_hits, 149);
    assert_eq!(client.monitor().total_calls(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn spawned_tasks_record_into_one_monitor() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/1/statuses/show/\d+\.json$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_json(1, "hello")))
        .expect(20)
        .mount(&mock_server)
        .await;

    let client = authorized_client(&mock_server);
    let handles: Vec<_> = (1..=20)
        .map(|id| {
            let client = client.clone();
            tokio::spawn(async move { client.show_status(id).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // Distinct ids share one statistics entry.
    let snapshot = client.monitor().snapshot();
    assert_eq!(snapshot.len(), 1);
    assert!(snapshot[0].0.ends_with("/1/statuses/show/{id}.json"));
    assert_eq!(snapshot[0].1.calls, 20);
    assert_eq!(snapshot[0].1.errors, 0);
}
