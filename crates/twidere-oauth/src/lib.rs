//! Twidere OAuth - OAuth 1.0a support for the Twidere REST client
//!
//! This crate provides the two halves of OAuth 1.0a that the client needs:
//!
//! - **Signing**: HMAC-SHA1 `Authorization` headers for every API request
//! - **Token exchange**: request token, user authorization, access token
//!   (PIN/callback flow) and xAuth
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use twidere_oauth::{OAuth1Client, OAuth1Config};
//!
//! let config = OAuth1Config::twitter("consumer_key", "consumer_secret");
//! let client = OAuth1Client::new(config);
//!
//! let request_token = client.get_request_token().await?;
//! println!("Authorize at {}", client.authorization_url(&request_token)?);
//!
//! // After the user enters the PIN shown by the service
//! let access = client.get_access_token(&request_token, &pin).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod oauth1;
mod signer;

pub use error::*;
pub use oauth1::*;
pub use signer::*;

/// Callback value requesting the out-of-band (PIN) flow.
pub const OUT_OF_BAND_CALLBACK: &str = "oob";
