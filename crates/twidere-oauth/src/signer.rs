//! OAuth 1.0a request signing.
//!
//! Every user-context request to the REST API carries an `Authorization`
//! header built here. The signature covers the HTTP method, the normalized
//! URL, the `oauth_*` protocol parameters, the URL's query string and any
//! form-encoded body parameters.

use std::fmt;
use std::fmt::Write as _;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::RngCore;
use sha1::Sha1;
use url::Url;

use crate::{OAuthError, OAuthResult};

/// RFC 3986 unreserved characters pass through: ALPHA / DIGIT / "-" / "." / "_" / "~"
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// A token and its shared secret (request token or access token).
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// `oauth_token` value.
    pub token: String,
    /// Shared secret used in the signing key.
    pub secret: String,
}

impl TokenPair {
    /// Create a token pair.
    #[must_use]
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("token", &self.token)
            .field("secret", &"[redacted]")
            .finish()
    }
}

/// OAuth 1.0a HMAC-SHA1 signer.
#[derive(Clone)]
pub struct OAuthSigner {
    consumer_key: String,
    consumer_secret: String,
    token: Option<TokenPair>,
}

impl fmt::Debug for OAuthSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthSigner")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[redacted]")
            .field("token", &self.token)
            .finish()
    }
}

impl OAuthSigner {
    /// Create a consumer-only signer (no token yet).
    #[must_use]
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: None,
        }
    }

    /// Attach a token (request or access token) to the signer.
    #[must_use]
    pub fn with_token(mut self, token: TokenPair) -> Self {
        self.token = Some(token);
        self
    }

    /// Whether a token is attached.
    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Consumer key.
    #[must_use]
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// Generate the `Authorization` header value for a request.
    ///
    /// `params` are the request parameters that take part in the signature:
    /// query parameters and form-encoded body parameters. Query parameters
    /// already present in `url` are folded in automatically.
    pub fn authorization_header(
        &self,
        method: &str,
        url: &str,
        params: &[(String, String)],
    ) -> OAuthResult<String> {
        self.authorization_header_with(method, url, params, &[], &generate_nonce(), timestamp()?)
    }

    /// Generate the `Authorization` header with extra `oauth_*` protocol
    /// parameters (e.g. `oauth_callback`, `oauth_verifier`).
    pub fn authorization_header_extra(
        &self,
        method: &str,
        url: &str,
        params: &[(String, String)],
        oauth_extra: &[(&str, &str)],
    ) -> OAuthResult<String> {
        self.authorization_header_with(
            method,
            url,
            params,
            oauth_extra,
            &generate_nonce(),
            timestamp()?,
        )
    }

    /// Deterministic variant with caller-supplied nonce and timestamp.
    pub fn authorization_header_with(
        &self,
        method: &str,
        url: &str,
        params: &[(String, String)],
        oauth_extra: &[(&str, &str)],
        nonce: &str,
        timestamp: u64,
    ) -> OAuthResult<String> {
        let mut oauth_params = self.protocol_params(oauth_extra, nonce, timestamp);

        let base_string = signature_base_string(method, url, &oauth_params, params)?;
        let signing_key = format!(
            "{}&{}",
            percent_encode(&self.consumer_secret),
            percent_encode(self.token.as_ref().map_or("", |t| t.secret.as_str()))
        );
        let signature = hmac_sha1(&signing_key, &base_string)?;

        oauth_params.push(("oauth_signature".to_string(), signature));
        oauth_params.sort();

        let header = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("OAuth {header}"))
    }

    fn protocol_params(
        &self,
        oauth_extra: &[(&str, &str)],
        nonce: &str,
        timestamp: u64,
    ) -> Vec<(String, String)> {
        let mut params = vec![
            ("oauth_consumer_key".to_string(), self.consumer_key.clone()),
            ("oauth_nonce".to_string(), nonce.to_string()),
            (
                "oauth_signature_method".to_string(),
                SIGNATURE_METHOD.to_string(),
            ),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
        ];
        if let Some(token) = &self.token {
            params.push(("oauth_token".to_string(), token.token.clone()));
        }
        params.extend(
            oauth_extra
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string())),
        );
        params
    }
}

/// Build the signature base string: `METHOD&url&params`.
pub(crate) fn signature_base_string(
    method: &str,
    url: &str,
    oauth_params: &[(String, String)],
    params: &[(String, String)],
) -> OAuthResult<String> {
    let parsed = Url::parse(url)?;
    let host = parsed
        .host_str()
        .ok_or_else(|| OAuthError::SignatureError(format!("URL has no host: {url}")))?;

    let mut base_url = format!("{}://{}", parsed.scheme(), host);
    if let Some(port) = parsed.port() {
        let _ = write!(base_url, ":{port}");
    }
    base_url.push_str(parsed.path());

    // Encode first, then sort by encoded key and value
    let mut encoded: Vec<(String, String)> = oauth_params
        .iter()
        .chain(params)
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.extend(
        parsed
            .query_pairs()
            .map(|(k, v)| (percent_encode(&k), percent_encode(&v))),
    );
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    Ok(format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(&base_url),
        percent_encode(&param_string)
    ))
}

/// Percent-encode a string according to RFC 3986.
#[must_use]
pub fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, OAUTH_ENCODE_SET).to_string()
}

/// Generate a random nonce for OAuth.
fn generate_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn timestamp() -> OAuthResult<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| OAuthError::SignatureError(format!("Failed to get timestamp: {e}")))
}

/// Compute HMAC-SHA1 and return the base64-encoded result.
fn hmac_sha1(key: &str, data: &str) -> OAuthResult<String> {
    let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes())
        .map_err(|e| OAuthError::SignatureError(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}
