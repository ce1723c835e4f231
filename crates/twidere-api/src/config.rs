//! Client configuration.

use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use twidere_oauth::{OAuth1Config, OAuthSigner, TokenPair};

/// Configuration for [`TwitterClient`](crate::TwitterClient).
#[derive(Clone, Serialize, Deserialize)]
pub struct TwitterConfig {
    /// OAuth 1.0a Consumer Key (API Key)
    #[serde(default)]
    pub consumer_key: String,

    /// OAuth 1.0a Consumer Secret (API Secret)
    #[serde(default)]
    pub consumer_secret: String,

    /// OAuth 1.0a Access Token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// OAuth 1.0a Access Token Secret
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token_secret: Option<String>,

    /// Base URL for REST calls (default: https://api.twitter.com/1/)
    #[serde(default = "default_rest_base_url")]
    pub rest_base_url: String,

    /// Base URL for the search API (default: https://search.twitter.com/)
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,

    /// Base URL for media uploads (default: https://upload.twitter.com/1/)
    #[serde(default = "default_upload_base_url")]
    pub upload_base_url: String,

    /// OAuth request token endpoint
    #[serde(default = "default_request_token_url")]
    pub oauth_request_token_url: String,

    /// OAuth user authorization page
    #[serde(default = "default_authorization_url")]
    pub oauth_authorization_url: String,

    /// OAuth access token endpoint
    #[serde(default = "default_access_token_url")]
    pub oauth_access_token_url: String,

    /// OAuth callback, `None` for the out-of-band PIN flow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth_callback_url: Option<String>,

    /// Send `include_entities` as true
    #[serde(default = "default_true")]
    pub include_entities: bool,

    /// Send `include_rts` as true
    #[serde(default = "default_true")]
    pub include_rts: bool,

    /// Request timeout
    #[serde(default = "default_timeout", with = "duration_secs")]
    pub timeout: Duration,

    /// User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_rest_base_url() -> String {
    "https://api.twitter.com/1/".into()
}

fn default_search_base_url() -> String {
    "https://search.twitter.com/".into()
}

fn default_upload_base_url() -> String {
    "https://upload.twitter.com/1/".into()
}

fn default_request_token_url() -> String {
    "https://api.twitter.com/oauth/request_token".into()
}

fn default_authorization_url() -> String {
    "https://api.twitter.com/oauth/authorize".into()
}

fn default_access_token_url() -> String {
    "https://api.twitter.com/oauth/access_token".into()
}

const fn default_true() -> bool {
    true
}

const fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    format!("twidere-rs/{}", env!("CARGO_PKG_VERSION"))
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            consumer_key: String::new(),
            consumer_secret: String::new(),
            access_token: None,
            access_token_secret: None,
            rest_base_url: default_rest_base_url(),
            search_base_url: default_search_base_url(),
            upload_base_url: default_upload_base_url(),
            oauth_request_token_url: default_request_token_url(),
            oauth_authorization_url: default_authorization_url(),
            oauth_access_token_url: default_access_token_url(),
            oauth_callback_url: None,
            include_entities: true,
            include_rts: true,
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl std::fmt::Debug for TwitterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterConfig")
            .field("consumer_key", &self.consumer_key)
            .field("access_token", &self.access_token)
            .field("rest_base_url", &self.rest_base_url)
            .field("search_base_url", &self.search_base_url)
            .field("upload_base_url", &self.upload_base_url)
            .field("include_entities", &self.include_entities)
            .field("include_rts", &self.include_rts)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl TwitterConfig {
    /// Configuration with consumer credentials and default endpoints.
    #[must_use]
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            ..Self::default()
        }
    }

    /// Set the user access token.
    #[must_use]
    pub fn with_access_token(
        mut self,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        self.access_token = Some(token.into());
        self.access_token_secret = Some(token_secret.into());
        self
    }

    /// Point every API base URL at `root` (e.g. a mock server).
    ///
    /// REST and upload calls go to `{root}/1/`, search calls to `{root}/`.
    #[must_use]
    pub fn with_api_root(mut self, root: &str) -> Self {
        let root = root.trim_end_matches('/');
        self.rest_base_url = format!("{root}/1/");
        self.upload_base_url = format!("{root}/1/");
        self.search_base_url = format!("{root}/");
        self.oauth_request_token_url = format!("{root}/oauth/request_token");
        self.oauth_authorization_url = format!("{root}/oauth/authorize");
        self.oauth_access_token_url = format!("{root}/oauth/access_token");
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set whether `include_entities` is sent as true.
    #[must_use]
    pub const fn with_include_entities(mut self, enabled: bool) -> Self {
        self.include_entities = enabled;
        self
    }

    /// Set whether `include_rts` is sent as true.
    #[must_use]
    pub const fn with_include_rts(mut self, enabled: bool) -> Self {
        self.include_rts = enabled;
        self
    }

    /// Whether both halves of the access token are present and non-empty.
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        self.access_token_pair().is_some()
    }

    pub(crate) fn access_token_pair(&self) -> Option<TokenPair> {
        match (&self.access_token, &self.access_token_secret) {
            (Some(token), Some(secret)) if !token.is_empty() && !secret.is_empty() => {
                Some(TokenPair::new(token, secret))
            }
            _ => None,
        }
    }

    /// Signer for user-context requests, if an access token is configured.
    pub(crate) fn signer(&self) -> Option<OAuthSigner> {
        self.access_token_pair().map(|pair| {
            OAuthSigner::new(&self.consumer_key, &self.consumer_secret).with_token(pair)
        })
    }

    /// Settings for the token exchange endpoints.
    #[must_use]
    pub fn oauth_config(&self) -> OAuth1Config {
        let config = OAuth1Config::new(
            &self.consumer_key,
            &self.consumer_secret,
            &self.oauth_request_token_url,
            &self.oauth_authorization_url,
            &self.oauth_access_token_url,
        );
        match &self.oauth_callback_url {
            Some(callback) => config.with_callback(callback),
            None => config,
        }
    }

    /// Ensure every base URL ends with `/` so endpoint paths append cleanly.
    pub(crate) fn normalized(mut self) -> Self {
        for url in [
            &mut self.rest_base_url,
            &mut self.search_base_url,
            &mut self.upload_base_url,
        ] {
            if !url.ends_with('/') {
                url.push('/');
            }
        }
        self
    }
}

/// Account access level reported in the `X-Access-Level` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessLevel {
    /// `read`
    Read,
    /// `read-write`
    ReadWrite,
    /// `read-write-directmessages`
    ReadWriteDirectMessages,
}

impl AccessLevel {
    /// Parse the header value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "read" => Some(Self::Read),
            "read-write" => Some(Self::ReadWrite),
            "read-write-directmessages" => Some(Self::ReadWriteDirectMessages),
            _ => None,
        }
    }

    /// Whether direct messages may be read.
    #[must_use]
    pub const fn can_read_direct_messages(self) -> bool {
        matches!(self, Self::ReadWriteDirectMessages)
    }
}

/// Rate limit information from API response headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitInfo {
    /// Maximum number of requests allowed in the window
    pub limit: Option<u32>,

    /// Remaining requests in the current window
    pub remaining: Option<u32>,

    /// Unix timestamp when the rate limit resets
    pub reset: Option<u64>,
}

impl RateLimitInfo {
    /// Parse rate limit info from response headers.
    ///
    /// Both the `X-RateLimit-*` and `X-Rate-Limit-*` spellings are accepted.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: header_value(headers, "x-ratelimit-limit")
                .or_else(|| header_value(headers, "x-rate-limit-limit")),
            remaining: header_value(headers, "x-ratelimit-remaining")
                .or_else(|| header_value(headers, "x-rate-limit-remaining")),
            reset: header_value(headers, "x-ratelimit-reset")
                .or_else(|| header_value(headers, "x-rate-limit-reset")),
        }
    }

    /// Whether any rate limit header was present.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.limit.is_some() || self.remaining.is_some() || self.reset.is_some()
    }

    /// Check if we're rate limited (remaining == 0).
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }

    /// Get the duration until rate limit resets.
    #[must_use]
    pub fn time_until_reset(&self) -> Option<Duration> {
        let reset = self.reset?;
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .ok()?
            .as_secs();

        if reset > now {
            Some(Duration::from_secs(reset - now))
        } else {
            None
        }
    }
}

fn header_value<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}
