//! OAuth 1.0a token exchange.
//!
//! Supports the three-legged flow (request token, user authorization,
//! access token) and xAuth, where the consumer trades a screen name and
//! password directly for an access token.

use std::collections::HashMap;

use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::{OAuthError, OAuthResult, OAuthSigner, TokenPair};

/// Parameter carrying the callback URL in the request-token step.
pub const OAUTH_CALLBACK_PARAM: &str = "oauth_callback";

/// Parameter carrying the verifier (PIN) in the access-token step.
pub const OAUTH_VERIFIER_PARAM: &str = "oauth_verifier";

/// OAuth 1.0a configuration.
#[derive(Debug, Clone)]
pub struct OAuth1Config {
    /// Consumer key (API key).
    pub consumer_key: String,
    /// Consumer secret (API secret).
    pub consumer_secret: String,
    /// Request token URL.
    pub request_token_url: String,
    /// Authorization URL.
    pub authorization_url: String,
    /// Access token URL.
    pub access_token_url: String,
    /// Callback URL, `None` for the out-of-band PIN flow.
    pub callback_url: Option<String>,
}

impl OAuth1Config {
    /// Create a new OAuth 1.0a configuration.
    #[must_use]
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        request_token_url: impl Into<String>,
        authorization_url: impl Into<String>,
        access_token_url: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            request_token_url: request_token_url.into(),
            authorization_url: authorization_url.into(),
            access_token_url: access_token_url.into(),
            callback_url: None,
        }
    }

    /// Configuration pointing at the public Twitter OAuth endpoints.
    #[must_use]
    pub fn twitter(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self::new(
            consumer_key,
            consumer_secret,
            "https://api.twitter.com/oauth/request_token",
            "https://api.twitter.com/oauth/authorize",
            "https://api.twitter.com/oauth/access_token",
        )
    }

    /// Set callback URL.
    #[must_use]
    pub fn with_callback(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Signer holding only the consumer credentials.
    #[must_use]
    pub fn signer(&self) -> OAuthSigner {
        OAuthSigner::new(&self.consumer_key, &self.consumer_secret)
    }
}

/// Request token from the first step of the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestToken {
    /// Token and secret.
    pub pair: TokenPair,
    /// Whether the provider confirmed the callback.
    pub callback_confirmed: bool,
}

/// Access token identifying a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// Token and secret.
    pub pair: TokenPair,
    /// Numeric user id, when the provider reports it.
    pub user_id: Option<u64>,
    /// Screen name, when the provider reports it.
    pub screen_name: Option<String>,
}

/// OAuth 1.0a client.
#[derive(Debug, Clone)]
pub struct OAuth1Client {
    config: OAuth1Config,
    http_client: Client,
}

impl OAuth1Client {
    /// Create a new OAuth 1.0a client.
    #[must_use]
    pub fn new(config: OAuth1Config) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    /// Create with a custom HTTP client.
    #[must_use]
    pub const fn with_http_client(config: OAuth1Config, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Get configuration.
    #[must_use]
    pub const fn config(&self) -> &OAuth1Config {
        &self.config
    }

    /// Step 1: obtain a request token.
    #[instrument(skip(self))]
    pub async fn get_request_token(&self) -> OAuthResult<RequestToken> {
        let callback = self
            .config
            .callback_url
            .as_deref()
            .unwrap_or(crate::OUT_OF_BAND_CALLBACK);

        let auth_header = self.config.signer().authorization_header_extra(
            "POST",
            &self.config.request_token_url,
            &[],
            &[(OAUTH_CALLBACK_PARAM, callback)],
        )?;

        let body = self
            .post_token_request(&self.config.request_token_url, auth_header, &[])
            .await?;
        parse_request_token(&body)
    }

    /// Step 2: URL the user visits to authorize the request token.
    pub fn authorization_url(&self, request_token: &RequestToken) -> OAuthResult<String> {
        let mut url = Url::parse(&self.config.authorization_url)?;
        url.query_pairs_mut()
            .append_pair("oauth_token", &request_token.pair.token);
        Ok(url.into())
    }

    /// Step 3: exchange the authorized request token for an access token.
    #[instrument(skip(self, request_token, oauth_verifier))]
    pub async fn get_access_token(
        &self,
        request_token: &RequestToken,
        oauth_verifier: &str,
    ) -> OAuthResult<AccessToken> {
        let auth_header = self
            .config
            .signer()
            .with_token(request_token.pair.clone())
            .authorization_header_extra(
                "POST",
                &self.config.access_token_url,
                &[],
                &[(OAUTH_VERIFIER_PARAM, oauth_verifier)],
            )?;

        let body = self
            .post_token_request(&self.config.access_token_url, auth_header, &[])
            .await?;
        parse_access_token(&body)
    }

    /// xAuth: exchange a screen name and password for an access token.
    #[instrument(skip(self, password))]
    pub async fn get_xauth_access_token(
        &self,
        screen_name: &str,
        password: &str,
    ) -> OAuthResult<AccessToken> {
        let form = vec![
            ("x_auth_mode".to_string(), "client_auth".to_string()),
            ("x_auth_password".to_string(), password.to_string()),
            ("x_auth_username".to_string(), screen_name.to_string()),
        ];

        let auth_header = self.config.signer().authorization_header(
            "POST",
            &self.config.access_token_url,
            &form,
        )?;

        let body = self
            .post_token_request(&self.config.access_token_url, auth_header, &form)
            .await?;
        parse_access_token(&body)
    }

    async fn post_token_request(
        &self,
        url: &str,
        auth_header: String,
        form: &[(String, String)],
    ) -> OAuthResult<String> {
        debug!(url, "Requesting OAuth token");

        let mut request = self
            .http_client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, auth_header);
        if !form.is_empty() {
            request = request.form(form);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(OAuthError::TokenExchangeFailed {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

fn parse_form(body: &str) -> OAuthResult<HashMap<String, String>> {
    serde_urlencoded::from_str(body).map_err(|e| OAuthError::InvalidTokenResponse(e.to_string()))
}

fn required(params: &HashMap<String, String>, key: &str) -> OAuthResult<String> {
    params
        .get(key)
        .cloned()
        .ok_or_else(|| OAuthError::InvalidTokenResponse(format!("Missing {key}")))
}

/// Parse request token response.
fn parse_request_token(body: &str) -> OAuthResult<RequestToken> {
    let params = parse_form(body)?;

    Ok(RequestToken {
        pair: TokenPair::new(
            required(&params, "oauth_token")?,
            required(&params, "oauth_token_secret")?,
        ),
        callback_confirmed: params
            .get("oauth_callback_confirmed")
            .is_some_and(|v| v == "true"),
    })
}

/// Parse access token response.
fn parse_access_token(body: &str) -> OAuthResult<AccessToken> {
    let params = parse_form(body)?;

    Ok(AccessToken {
        pair: TokenPair::new(
            required(&params, "oauth_token")?,
            required(&params, "oauth_token_secret")?,
        ),
        user_id: params.get("user_id").and_then(|v| v.parse().ok()),
        screen_name: params.get("screen_name").cloned(),
    })
}
