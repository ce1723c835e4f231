//! The [`TwitterClient`] facade core.
//!
//! Endpoint methods live in [`crate::resources`], one module per resource
//! family; this module holds what they share: configuration, the signed
//! transport, the call monitor and the cached identity.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use tracing::{debug, instrument};
use twidere_oauth::OAuth1Client;

use crate::config::TwitterConfig;
use crate::error::{TwitterError, TwitterResult};
use crate::factory;
use crate::http::{HttpClient, HttpResponse, Method, Params};
use crate::monitor::ApiMonitor;
use crate::types::User;

/// Authenticated user, filled in by [`TwitterClient::verify_credentials`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct Identity {
    id: u64,
    screen_name: String,
}

/// A request target: the concrete URL and the path template it came from.
///
/// The monitor keys statistics by template, so ids in the path do not
/// create new entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Endpoint {
    pub url: String,
    pub name: String,
}

impl Endpoint {
    fn new(base: &str, path: &str) -> Self {
        let url = format!("{base}{path}");
        Self {
            name: url.clone(),
            url,
        }
    }

    /// Substitute the single `{..}` placeholder of `template` with `value`.
    fn with_arg(base: &str, template: &str, value: impl std::fmt::Display) -> Self {
        let path = match (template.find('{'), template.find('}')) {
            (Some(open), Some(close)) if open < close => {
                format!("{}{value}{}", &template[..open], &template[close + 1..])
            }
            _ => template.to_string(),
        };
        Self {
            url: format!("{base}{path}"),
            name: format!("{base}{template}"),
        }
    }
}

#[derive(Debug)]
struct Inner {
    config: TwitterConfig,
    http: HttpClient,
    monitor: Arc<ApiMonitor>,
    identity: RwLock<Option<Identity>>,
}

/// Client for the Twitter v1 REST API.
///
/// Cheap to clone; clones share the transport, monitor and cached identity.
/// Safe to use from any number of tasks at once.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    inner: Arc<Inner>,
}

impl TwitterClient {
    /// Create a client from configuration.
    pub fn new(config: TwitterConfig) -> TwitterResult<Self> {
        Self::with_monitor(config, Arc::new(ApiMonitor::new()))
    }

    fn with_monitor(config: TwitterConfig, monitor: Arc<ApiMonitor>) -> TwitterResult<Self> {
        let config = config.normalized();
        let http = HttpClient::new(&config)?;
        Ok(Self {
            inner: Arc::new(Inner {
                config,
                http,
                monitor,
                identity: RwLock::new(None),
            }),
        })
    }

    /// A new client for another access token, sharing this client's monitor.
    pub fn with_access_token(
        &self,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> TwitterResult<Self> {
        let config = self
            .inner
            .config
            .clone()
            .with_access_token(token, token_secret);
        Self::with_monitor(config, Arc::clone(&self.inner.monitor))
    }

    #[must_use]
    pub fn config(&self) -> &TwitterConfig {
        &self.inner.config
    }

    /// Whether an access token is configured.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.inner.http.is_authorized()
    }

    /// Per-endpoint call statistics.
    #[must_use]
    pub fn monitor(&self) -> &ApiMonitor {
        &self.inner.monitor
    }

    /// Token exchange client built from this client's consumer credentials.
    ///
    /// Shares the API transport, so the configured timeout applies to token
    /// requests too.
    #[must_use]
    pub fn oauth_client(&self) -> OAuth1Client {
        OAuth1Client::with_http_client(
            self.inner.config.oauth_config(),
            self.inner.http.client().clone(),
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Identity
    // ─────────────────────────────────────────────────────────────────────────

    /// Fetch the authenticating user and cache its id and screen name.
    #[instrument(skip(self))]
    pub async fn verify_credentials(&self) -> TwitterResult<User> {
        self.ensure_authorized()?;
        let url = self.rest_url("account/verify_credentials.json");
        let response = self.get(&url, self.entities(Params::new())).await?;
        let user: User = factory::object(&response)?;

        debug!(user_id = user.id, screen_name = %user.screen_name, "Verified credentials");
        *self.inner.identity.write() = Some(Identity {
            id: user.id,
            screen_name: user.screen_name.clone(),
        });
        Ok(user)
    }

    /// Authenticated user's id, verifying credentials on first use.
    pub async fn id(&self) -> TwitterResult<u64> {
        Ok(self.identity().await?.id)
    }

    /// Authenticated user's screen name, verifying credentials on first use.
    pub async fn screen_name(&self) -> TwitterResult<String> {
        Ok(self.identity().await?.screen_name)
    }

    async fn identity(&self) -> TwitterResult<Identity> {
        let cached = self.inner.identity.read().clone();
        match cached {
            Some(identity) => Ok(identity),
            None => {
                let user = self.verify_credentials().await?;
                Ok(Identity {
                    id: user.id,
                    screen_name: user.screen_name,
                })
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Shared plumbing for resource modules
    // ─────────────────────────────────────────────────────────────────────────

    /// Fail before any I/O when no access token is configured.
    pub(crate) fn ensure_authorized(&self) -> TwitterResult<()> {
        if self.is_authorized() {
            Ok(())
        } else {
            Err(TwitterError::AuthorizationRequired)
        }
    }

    pub(crate) fn rest_url(&self, path: &str) -> Endpoint {
        Endpoint::new(&self.inner.config.rest_base_url, path)
    }

    /// REST endpoint whose path carries one argument, e.g. `statuses/show/{id}.json`.
    pub(crate) fn rest_url_with(
        &self,
        template: &str,
        value: impl std::fmt::Display,
    ) -> Endpoint {
        Endpoint::with_arg(&self.inner.config.rest_base_url, template, value)
    }

    pub(crate) fn search_url(&self, path: &str) -> Endpoint {
        Endpoint::new(&self.inner.config.search_base_url, path)
    }

    pub(crate) fn upload_url(&self, path: &str) -> Endpoint {
        Endpoint::new(&self.inner.config.upload_base_url, path)
    }

    /// Append `include_entities`.
    pub(crate) fn entities(&self, params: Params) -> Params {
        params.with("include_entities", self.inner.config.include_entities)
    }

    /// Append `include_rts`.
    pub(crate) fn rts(&self, params: Params) -> Params {
        params.with("include_rts", self.inner.config.include_rts)
    }

    /// Append `include_my_retweet=1`.
    pub(crate) fn my_retweet(params: Params) -> Params {
        params.with("include_my_retweet", 1)
    }

    pub(crate) async fn get(
        &self,
        endpoint: &Endpoint,
        params: Params,
    ) -> TwitterResult<HttpResponse> {
        self.call(Method::Get, endpoint, params).await
    }

    pub(crate) async fn post(
        &self,
        endpoint: &Endpoint,
        params: Params,
    ) -> TwitterResult<HttpResponse> {
        self.call(Method::Post, endpoint, params).await
    }

    /// One timed round trip, recorded in the monitor whatever the outcome.
    async fn call(
        &self,
        method: Method,
        endpoint: &Endpoint,
        params: Params,
    ) -> TwitterResult<HttpResponse> {
        let start = Instant::now();
        let result = self.inner.http.request(method, &endpoint.url, params).await;
        let ok = result.as_ref().is_ok_and(|r| r.status < 400);
        self.inner.monitor.record(&endpoint.name, start.elapsed(), ok);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, path_regex, query_param},
    };

    fn test_config(mock_server: &MockServer) -> TwitterConfig {
        TwitterConfig::new("test_consumer_key", "test_consumer_secret")
            .with_access_token("test_access_token", "test_access_token_secret")
            .with_api_root(&mock_server.uri())
    }

    #[tokio::test]
    async fn test_verify_credentials_caches_identity() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/account/verify_credentials.json"))
            .and(query_param("include_entities", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 6253282,
                "screen_name": "twitterapi",
                "name": "Twitter API"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TwitterClient::new(test_config(&mock_server)).unwrap();

        assert_eq!(client.screen_name().await.unwrap(), "twitterapi");
        assert_eq!(client.id().await.unwrap(), 6_253_282);
        // Cached by clones too
        assert_eq!(client.clone().id().await.unwrap(), 6_253_282);
    }

    #[tokio::test]
    async fn test_unauthorized_fails_before_io() {
        let mock_server = MockServer::start().await;
        let config = TwitterConfig::new("ck", "cs").with_api_root(&mock_server.uri());
        let client = TwitterClient::new(config).unwrap();

        let err = client.verify_credentials().await.unwrap_err();
        assert!(matches!(err, TwitterError::AuthorizationRequired));
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_monitor_records_calls() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/account/verify_credentials.json"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "Could not authenticate you.",
                "request": "/1/account/verify_credentials.json"
            })))
            .mount(&mock_server)
            .await;

        let client = TwitterClient::new(test_config(&mock_server)).unwrap();
        let err = client.verify_credentials().await.unwrap_err();
        assert_eq!(err.status_code(), Some(401));

        let url = format!("{}/1/account/verify_credentials.json", mock_server.uri());
        let stats = client.monitor().stats(&url).unwrap();
        assert_eq!(stats.calls, 1);
        assert_eq!(stats.errors, 1);
    }

    #[tokio::test]
    async fn test_oauth_client_uses_configured_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/request_token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("oauth_token=t&oauth_token_secret=s")
                    .set_delay(std::time::Duration::from_secs(5)),
            )
            .mount(&mock_server)
            .await;

        let config = TwitterConfig::new("ck", "cs")
            .with_api_root(&mock_server.uri())
            .with_timeout(std::time::Duration::from_millis(200));
        let client = TwitterClient::new(config).unwrap();

        let start = Instant::now();
        let result = client.oauth_client().get_request_token().await;
        assert!(result.is_err());
        assert!(start.elapsed() < std::time::Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_monitor_counts_redirect_as_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/users/profile_image/alice.json"))
            .respond_with(
                ResponseTemplate::new(302).insert_header("Location", "https://img/alice.png"),
            )
            .mount(&mock_server)
            .await;

        let client = TwitterClient::new(test_config(&mock_server)).unwrap();
        client
            .profile_image("alice", crate::params::ProfileImageSize::Normal)
            .await
            .unwrap();

        let snapshot = client.monitor().snapshot();
        assert_eq!(snapshot[0].1.calls, 1);
        assert_eq!(snapshot[0].1.errors, 0);
    }

    #[test]
    fn test_with_access_token_shares_monitor() {
        let client = TwitterClient::new(TwitterConfig::new("ck", "cs")).unwrap();
        assert!(!client.is_authorized());

        let authed = client.with_access_token("at", "ats").unwrap();
        assert!(authed.is_authorized());
        assert!(std::ptr::eq(client.monitor(), authed.monitor()));
    }

    #[test]
    fn test_urls() {
        let client = TwitterClient::new(TwitterConfig::default()).unwrap();
        assert_eq!(
            client.rest_url("statuses/home_timeline.json").url,
            "https://api.twitter.com/1/statuses/home_timeline.json"
        );
        assert_eq!(
            client.search_url("search.json").url,
            "https://search.twitter.com/search.json"
        );
        assert_eq!(
            client.upload_url("statuses/update_with_media.json").url,
            "https://upload.twitter.com/1/statuses/update_with_media.json"
        );
    }

    #[test]
    fn test_templated_endpoint() {
        let client = TwitterClient::new(TwitterConfig::default()).unwrap();
        let endpoint = client.rest_url_with("statuses/show/{id}.json", 42);
        assert_eq!(endpoint.url, "https://api.twitter.com/1/statuses/show/42.json");
        assert_eq!(endpoint.name, "https://api.twitter.com/1/statuses/show/{id}.json");

        let endpoint = client.rest_url_with("statuses/{id}/retweeted_by/ids.json", 7);
        assert_eq!(endpoint.url, "https://api.twitter.com/1/statuses/7/retweeted_by/ids.json");
    }

    #[tokio::test]
    async fn test_monitor_keys_by_template() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path_regex(r"^/1/statuses/show/\d+\.json$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 1,
                "text": "hello",
                "created_at": "Wed Aug 27 13:08:45 +0000 2008"
            })))
            .expect(3)
            .mount(&mock_server)
            .await;

        let client = TwitterClient::new(test_config(&mock_server)).unwrap();
        for id in [1, 2, 3] {
            client.show_status(id).await.unwrap();
        }

        let snapshot = client.monitor().snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(
            snapshot[0].0,
            format!("{}/1/statuses/show/{{id}}.json", mock_server.uri())
        );
        assert_eq!(snapshot[0].1.calls, 3);
    }
}
