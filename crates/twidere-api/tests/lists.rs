//! List and direct message endpoints against a mock server.

mod common;

use common::{
    anonymous_client, authorized_client, direct_message_json, list_json, mock_get, mock_post,
    single_body, single_query, status_json, user_json,
};
use serde_json::json;
use twidere_api::{ListUpdate, Paging, TwitterError, UserRef};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn create_private_list() {
    let mock_server = MockServer::start().await;
    mock_post(
        &mock_server,
        "/1/lists/create.json",
        list_json(101, "rustaceans", "private"),
    )
    .await;

    let client = authorized_client(&mock_server);
    let list = client
        .create_user_list("rustaceans", false, None)
        .await
        .unwrap();
    assert_eq!(list.id, 101);
    assert!(!list.is_public());

    let body = single_body(&mock_server).await;
    assert!(body.contains("name=rustaceans"));
    assert!(body.contains("mode=private"));
    assert!(!body.contains("description"));
}

#[tokio::test]
async fn update_list_keeps_unset_name_out() {
    let mock_server = MockServer::start().await;
    mock_post(&mock_server, "/1/lists/update.json", list_json(101, "rustaceans", "public")).await;

    let client = authorized_client(&mock_server);
    let update = ListUpdate {
        name: None,
        public: true,
        description: Some("crabs".into()),
    };
    client.update_user_list(101, &update).await.unwrap();

    let body = single_body(&mock_server).await;
    assert!(body.contains("list_id=101"));
    assert!(body.contains("mode=public"));
    assert!(body.contains("description=crabs"));
    assert!(!body.contains("name="));
}

#[tokio::test]
async fn list_statuses_use_per_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/lists/statuses.json"))
        .and(query_param("list_id", "101"))
        .and(query_param("per_page", "5"))
        .and(query_param("include_rts", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([status_json(1, "a")])))
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let statuses = client
        .user_list_statuses(101, Paging::new().count(5))
        .await
        .unwrap();
    assert_eq!(statuses.len(), 1);
    assert!(!single_query(&mock_server).await.contains("count="));
}

#[tokio::test]
async fn owned_lists_are_pagable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/lists.json"))
        .and(query_param("screen_name", "twitterapi"))
        .and(query_param("cursor", "-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lists": [list_json(1, "a", "public"), list_json(2, "b", "private")],
            "previous_cursor": 0,
            "next_cursor": 42
        })))
        .mount(&mock_server)
        .await;

    let client = anonymous_client(&mock_server);
    let page = client
        .user_lists(&UserRef::from("twitterapi"), -1)
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.next_cursor, 42);
    assert!(page.has_next());
}

#[tokio::test]
async fn memberships_authorization_depends_on_filter() {
    let mock_server = MockServer::start().await;
    mock_get(
        &mock_server,
        "/1/lists/memberships.json",
        json!({"lists": [], "previous_cursor": 0, "next_cursor": 0}),
    )
    .await;

    let client = anonymous_client(&mock_server);
    let alice = UserRef::from("alice");

    let err = client
        .user_list_memberships(None, -1, false)
        .await
        .unwrap_err();
    assert!(matches!(err, TwitterError::AuthorizationRequired));
    let err = client
        .user_list_memberships(Some(&alice), -1, true)
        .await
        .unwrap_err();
    assert!(matches!(err, TwitterError::AuthorizationRequired));

    let page = client
        .user_list_memberships(Some(&alice), -1, false)
        .await
        .unwrap();
    assert!(page.is_empty());

    let query = single_query(&mock_server).await;
    assert!(query.contains("screen_name=alice"));
    assert!(query.contains("filter_to_owned_lists=false"));
}

#[tokio::test]
async fn add_members_in_bulk() {
    let mock_server = MockServer::start().await;
    mock_post(
        &mock_server,
        "/1/lists/members/create_all.json",
        list_json(101, "rustaceans", "public"),
    )
    .await;

    let client = authorized_client(&mock_server);
    client
        .add_user_list_members(101, &[UserRef::Id(1), UserRef::Id(2), UserRef::from("carol")])
        .await
        .unwrap();

    let body = single_body(&mock_server).await;
    assert!(body.contains("user_id=1%2C2"));
    assert!(body.contains("screen_name=carol"));
}

#[tokio::test]
async fn membership_check_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/lists/members/show.json"))
        .and(query_param("list_id", "101"))
        .and(query_param("user_id", "7"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "The specified user is not a member of this list",
            "request": "/1/lists/members/show.json"
        })))
        .mount(&mock_server)
        .await;

    let client = authorized_client(&mock_server);
    let err = client
        .show_user_list_membership(101, &UserRef::Id(7))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("not a member"));
}

#[tokio::test]
async fn subscribe_and_list_subscribers() {
    let mock_server = MockServer::start().await;
    mock_post(
        &mock_server,
        "/1/lists/subscribers/create.json",
        list_json(101, "rustaceans", "public"),
    )
    .await;
    mock_get(
        &mock_server,
        "/1/lists/subscribers.json",
        json!({"users": [user_json(3, "carol")], "previous_cursor": 0, "next_cursor": 0}),
    )
    .await;

    let client = authorized_client(&mock_server);
    let list = client.create_user_list_subscription(101).await.unwrap();
    assert_eq!(list.slug, "rustaceans");

    let subscribers = client.user_list_subscribers(101, -1).await.unwrap();
    assert_eq!(subscribers[0].screen_name, "carol");
}

#[tokio::test]
async fn direct_messages_round() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/direct_messages.json"))
        .and(query_param("count", "10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([direct_message_json(1, "hey")])),
        )
        .mount(&mock_server)
        .await;
    mock_post(&mock_server, "/1/direct_messages/new.json", direct_message_json(2, "yo")).await;
    mock_post(
        &mock_server,
        "/1/direct_messages/destroy/2.json",
        direct_message_json(2, "yo"),
    )
    .await;

    let client = authorized_client(&mock_server);
    let inbox = client
        .direct_messages(Paging::new().count(10))
        .await
        .unwrap();
    assert_eq!(inbox[0].sender_screen_name, "alice");

    let sent = client
        .send_direct_message(&UserRef::from("bob"), "yo")
        .await
        .unwrap();
    assert_eq!(sent.recipient_screen_name, "bob");
    assert_eq!(client.destroy_direct_message(2).await.unwrap().id, 2);

    let requests = mock_server.received_requests().await.unwrap();
    let send = String::from_utf8_lossy(&requests[1].body).into_owned();
    assert!(send.contains("screen_name=bob"));
    assert!(send.contains("text=yo"));
}

#[tokio::test]
async fn direct_messages_require_authorization() {
    let mock_server = MockServer::start().await;
    let client = anonymous_client(&mock_server);

    assert!(matches!(
        client.sent_direct_messages(Paging::new()).await,
        Err(TwitterError::AuthorizationRequired)
    ));
    assert!(matches!(
        client.show_direct_message(1).await,
        Err(TwitterError::AuthorizationRequired)
    ));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
