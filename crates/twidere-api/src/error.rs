//! Twitter-specific error types.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use twidere_oauth::OAuthError;

/// Twitter client errors.
#[derive(Error, Debug)]
pub enum TwitterError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// OAuth signing or token exchange failed
    #[error("OAuth error: {0}")]
    OAuth(#[from] OAuthError),

    /// Twitter API returned an error status
    #[error("Twitter API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        error_code: Option<i32>,
        request: Option<String>,
        retry_after: Option<u64>,
    },

    /// The endpoint needs user context but no access token is configured
    #[error("Authentication credentials are missing")]
    AuthorizationRequired,

    /// A local file passed for upload cannot be used
    #[error("Invalid file {path}: {reason}")]
    InvalidFile { path: String, reason: String },

    /// Reading a local file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Response was well-formed HTTP but not the expected shape
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TwitterError {
    /// HTTP status code attached to this error, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::OAuth(e) => e.status_code(),
            _ => None,
        }
    }

    /// Whether the API answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Whether the API refused the call for rate limiting (420 or 429).
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.status_code(), Some(420 | 429))
    }

    /// Check if this error is worth retrying.
    ///
    /// The client never retries on its own; this is a hint for callers.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status >= 500 || matches!(status, 420 | 429),
            _ => false,
        }
    }

    /// Get the suggested retry delay.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Api { retry_after, .. } => retry_after.map(Duration::from_secs),
            _ => None,
        }
    }

    /// API error code reported in the body, if any.
    #[must_use]
    pub const fn error_code(&self) -> Option<i32> {
        match self {
            Self::Api { error_code, .. } => *error_code,
            _ => None,
        }
    }

    pub(crate) fn invalid_file(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFile {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for Twitter operations.
pub type TwitterResult<T> = Result<T, TwitterError>;

/// Decoded API error body.
///
/// The v1 API answers either `{"error": "...", "request": "..."}` or
/// `{"errors": [{"message": "...", "code": 34}]}`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ApiErrorBody {
    pub message: Option<String>,
    pub code: Option<i32>,
    pub request: Option<String>,
}

#[derive(Deserialize)]
struct RawErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    request: Option<String>,
    #[serde(default)]
    errors: Option<ErrorsField>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorsField {
    List(Vec<ErrorEntry>),
    Text(String),
}

#[derive(Deserialize)]
struct ErrorEntry {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<i32>,
}

impl ApiErrorBody {
    pub fn parse(body: &[u8]) -> Self {
        let Ok(raw) = serde_json::from_slice::<RawErrorBody>(body) else {
            return Self::default();
        };

        let (message, code) = match raw.errors {
            Some(ErrorsField::List(entries)) => entries
                .into_iter()
                .next()
                .map_or((None, None), |e| (e.message, e.code)),
            Some(ErrorsField::Text(text)) => (Some(text), None),
            None => (None, None),
        };

        Self {
            message: message.or(raw.error),
            code,
            request: raw.request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> TwitterError {
        TwitterError::Api {
            status,
            message: "boom".into(),
            error_code: None,
            request: None,
            retry_after: Some(15),
        }
    }

    #[test]
    fn test_parse_legacy_error_body() {
        let body = br#"{"error":"Not found","request":"/1/users/show.json"}"#;
        let parsed = ApiErrorBody::parse(body);
        assert_eq!(parsed.message.as_deref(), Some("Not found"));
        assert_eq!(parsed.request.as_deref(), Some("/1/users/show.json"));
        assert_eq!(parsed.code, None);
    }

    #[test]
    fn test_parse_errors_array() {
        let body = br#"{"errors":[{"message":"Sorry, that page does not exist","code":34}]}"#;
        let parsed = ApiErrorBody::parse(body);
        assert_eq!(
            parsed.message.as_deref(),
            Some("Sorry, that page does not exist")
        );
        assert_eq!(parsed.code, Some(34));
    }

    #[test]
    fn test_parse_errors_string() {
        let body = br#"{"errors":"Rate limit exceeded"}"#;
        let parsed = ApiErrorBody::parse(body);
        assert_eq!(parsed.message.as_deref(), Some("Rate limit exceeded"));
    }

    #[test]
    fn test_parse_non_json_body() {
        assert_eq!(ApiErrorBody::parse(b"<html>"), ApiErrorBody::default());
    }

    #[test]
    fn test_status_helpers() {
        assert!(api_error(404).is_not_found());
        assert!(api_error(420).is_rate_limited());
        assert!(api_error(429).is_rate_limited());
        assert!(api_error(503).is_retryable());
        assert!(!api_error(403).is_retryable());
        assert_eq!(api_error(500).retry_after(), Some(Duration::from_secs(15)));
        assert_eq!(TwitterError::AuthorizationRequired.status_code(), None);
    }
}
