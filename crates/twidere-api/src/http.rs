//! HTTP transport: parameter lists, OAuth signing, response capture.

use std::fmt;

use bytes::Bytes;
use reqwest::header::{HeaderMap, LOCATION, RETRY_AFTER};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, redirect};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use twidere_oauth::OAuthSigner;

use crate::config::{AccessLevel, RateLimitInfo, TwitterConfig};
use crate::error::{ApiErrorBody, TwitterError, TwitterResult};
use crate::params::ImageUpload;

/// HTTP method used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Upper-case method name, as used in the OAuth base string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered request parameters.
///
/// `None` values never make it into the list, so optional arguments left
/// unset are absent from the request rather than sent empty.
#[derive(Debug, Clone, Default)]
pub struct Params {
    pairs: Vec<(String, String)>,
    files: Vec<(String, ImageUpload)>,
}

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Add a parameter if `value` is `Some`.
    #[must_use]
    pub fn with_opt<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        self.push_opt(key, value);
        self
    }

    /// Attach a file for a multipart body.
    #[must_use]
    pub fn with_file(mut self, key: &str, file: ImageUpload) -> Self {
        self.files.push((key.to_string(), file));
        self
    }

    pub fn push(&mut self, key: &str, value: impl ToString) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Append every pair of `other`.
    pub fn extend(&mut self, other: Self) {
        self.pairs.extend(other.pairs);
        self.files.extend(other.files);
    }

    /// Value of the first parameter named `key`.
    #[cfg(test)]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    #[must_use]
    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }

    fn into_multipart(self) -> TwitterResult<Form> {
        let mut form = Form::new();
        for (key, value) in self.pairs {
            form = form.text(key, value);
        }
        for (key, file) in self.files {
            let part = Part::bytes(file.data.to_vec())
                .file_name(file.file_name)
                .mime_str(&file.content_type)?;
            form = form.part(key, part);
        }
        Ok(form)
    }
}

/// A captured API response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub rate_limit: RateLimitInfo,
    pub access_level: Option<AccessLevel>,
    /// `Location` header of a redirect.
    pub location: Option<String>,
    pub body: Bytes,
}

impl HttpResponse {
    /// Body as UTF-8 text.
    pub fn as_str(&self) -> TwitterResult<&str> {
        std::str::from_utf8(&self.body)
            .map_err(|e| TwitterError::UnexpectedResponse(format!("body is not UTF-8: {e}")))
    }

    /// Body decoded as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> TwitterResult<T> {
        serde_json::from_slice(&self.body).map_err(TwitterError::from)
    }
}

/// Signed HTTP transport shared by all endpoint calls.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    signer: Option<OAuthSigner>,
}

impl HttpClient {
    /// Build the transport from configuration.
    ///
    /// Redirects are not followed: the profile image endpoint answers with
    /// a redirect whose `Location` is the result.
    pub fn new(config: &TwitterConfig) -> TwitterResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            signer: config.signer(),
        })
    }

    /// The underlying reqwest client, configured with the request timeout.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Whether requests carry user credentials.
    #[must_use]
    pub const fn is_authorized(&self) -> bool {
        self.signer.is_some()
    }

    /// Issue one request. Statuses of 400 and above become [`TwitterError::Api`].
    #[instrument(skip(self, method, params), fields(method = %method))]
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        params: Params,
    ) -> TwitterResult<HttpResponse> {
        debug!(params = params.pairs().len(), "Making Twitter API request");

        let multipart = method == Method::Post && params.has_files();

        // Multipart bodies are not part of the signature.
        let signed: &[(String, String)] = if multipart { &[] } else { params.pairs() };
        let auth_header = match &self.signer {
            Some(signer) => Some(signer.authorization_header(method.as_str(), url, signed)?),
            None => None,
        };

        let mut req = match method {
            Method::Get => self.client.get(url).query(params.pairs()),
            Method::Post if multipart => self.client.post(url).multipart(params.into_multipart()?),
            Method::Post => self.client.post(url).form(params.pairs()),
        };

        if let Some(header) = auth_header {
            req = req.header("Authorization", header);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        let rate_limit = RateLimitInfo::from_headers(&headers);
        if rate_limit.is_exhausted() {
            debug!(reset = ?rate_limit.reset, "Rate limit exhausted");
        }

        if status >= 400 {
            let err = api_error(status, &headers, &rate_limit, &body);
            warn!(status, error = %err, "Twitter API request failed");
            return Err(err);
        }

        Ok(HttpResponse {
            status,
            rate_limit,
            access_level: headers
                .get("x-access-level")
                .and_then(|v| v.to_str().ok())
                .and_then(AccessLevel::parse),
            location: headers
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body,
        })
    }
}

fn api_error(
    status: u16,
    headers: &HeaderMap,
    rate_limit: &RateLimitInfo,
    body: &[u8],
) -> TwitterError {
    let parsed = ApiErrorBody::parse(body);

    let message = parsed.message.unwrap_or_else(|| {
        let text = String::from_utf8_lossy(body);
        let text = text.trim();
        if text.is_empty() {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown error")
                .to_string()
        } else {
            text.chars().take(200).collect()
        }
    });

    let retry_after = headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .or_else(|| rate_limit.time_until_reset().map(|d| d.as_secs()));

    TwitterError::Api {
        status,
        message,
        error_code: parsed.code,
        request: parsed.request,
        retry_after,
    }
}
