//! Twidere API - typed async client for the Twitter v1 REST API
//!
//! [`TwitterClient`] exposes one async method per endpoint, grouped by
//! resource family:
//!
//! - **Timelines & statuses**: home, mentions, user timelines, update,
//!   retweet, favorites
//! - **Users & social graph**: profiles, lookup, friendships, blocks,
//!   notifications, suggestions
//! - **Lists**: lists, members, subscribers, memberships
//! - **Direct messages**, **search**, **saved searches**
//! - **Account**: credentials, settings, profile and images
//! - **Trends**, **geo**, **help** and **legal**
//!
//! Every call is a single signed HTTP round trip. Endpoints that need a user
//! context fail with [`TwitterError::AuthorizationRequired`] before any I/O
//! when no access token is configured.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use twidere_api::{Paging, TwitterClient, TwitterConfig};
//!
//! let config = TwitterConfig::new("consumer_key", "consumer_secret")
//!     .with_access_token("token", "token_secret");
//! let client = TwitterClient::new(config)?;
//!
//! for status in client.home_timeline(Paging::new().count(20)).await? {
//!     println!("{}: {}", status.id, status.text);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod client;
pub mod config;
pub mod error;
mod factory;
mod http;
pub mod monitor;
pub mod params;
mod resources;
pub mod types;

pub use client::TwitterClient;
pub use config::{AccessLevel, RateLimitInfo, TwitterConfig};
pub use error::{TwitterError, TwitterResult};
pub use monitor::{ApiMonitor, EndpointStats};
pub use params::{
    AccountSettingsUpdate, DistanceUnit, GeoQuery, ImageUpload, ListUpdate, Paging,
    ProfileColors, ProfileImageSize, ProfileUpdate, Query, ResultType, StatusUpdate, UserRef,
};
pub use types::*;

pub use twidere_oauth::{AccessToken, OAuth1Client, OAuth1Config, OAuthError, RequestToken};
