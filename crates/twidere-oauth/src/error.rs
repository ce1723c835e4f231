//! OAuth error types.

/// OAuth errors.
#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    /// Invalid client configuration.
    #[error("Invalid OAuth configuration: {0}")]
    InvalidConfig(String),

    /// The provider rejected a token request.
    #[error("Token exchange failed ({status}): {body}")]
    TokenExchangeFailed {
        /// HTTP status returned by the provider.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Token response could not be understood.
    #[error("Invalid token response: {0}")]
    InvalidTokenResponse(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("URL parsing failed: {0}")]
    UrlError(#[from] url::ParseError),

    /// Signature computation failed.
    #[error("OAuth 1.0a signature error: {0}")]
    SignatureError(String),
}

impl OAuthError {
    /// HTTP status code attached to this error, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::TokenExchangeFailed { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for OAuth operations.
pub type OAuthResult<T> = Result<T, OAuthError>;
