//! Twitter API v1 types.
//!
//! Plain records mirroring the JSON the service returns. Unknown fields are
//! ignored; absent fields fall back to their defaults.

use std::collections::BTreeMap;
use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::{AccessLevel, RateLimitInfo};

// ─────────────────────────────────────────────────────────────────────────────
// Dates
// ─────────────────────────────────────────────────────────────────────────────

/// Lenient timestamp (de)serialization.
///
/// Accepts the REST format (`Wed Aug 27 13:08:45 +0000 2008`), RFC 2822
/// (search API), RFC 3339 (trends) and integer epoch seconds.
pub mod twitter_date {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub(crate) const REST_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Epoch(i64),
    }

    /// Parse any of the timestamp spellings the API uses.
    #[must_use]
    pub fn parse(value: &str) -> Option<DateTime<Utc>> {
        let value = value.trim();
        DateTime::parse_from_str(value, REST_FORMAT)
            .or_else(|_| DateTime::parse_from_rfc2822(value))
            .or_else(|_| DateTime::parse_from_rfc3339(value))
            .map(|d| d.with_timezone(&Utc))
            .ok()
    }

    fn from_raw(raw: Raw) -> Option<DateTime<Utc>> {
        match raw {
            Raw::Text(text) => parse(&text),
            Raw::Epoch(secs) => Utc.timestamp_opt(secs, 0).single(),
        }
    }

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(REST_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = Raw::deserialize(deserializer)?;
        from_raw(raw).ok_or_else(|| D::Error::custom("unrecognized timestamp"))
    }

    /// Same as the parent module, for optional fields.
    pub mod option {
        use super::{Raw, from_raw};
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            date: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Ok(Option::<Raw>::deserialize(deserializer)?.and_then(from_raw))
        }
    }
}

/// `retweet_count` is a number, or the string `"100+"` past one hundred.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n,
        Raw::Text(text) => text.trim_end_matches('+').parse().unwrap_or(0),
        Raw::Null(()) => 0,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// List wrappers
// ─────────────────────────────────────────────────────────────────────────────

/// Items from a list endpoint along with the response's rate limit headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseList<T> {
    pub items: Vec<T>,
    pub rate_limit: RateLimitInfo,
    pub access_level: Option<AccessLevel>,
}

impl<T> ResponseList<T> {
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            rate_limit: RateLimitInfo::default(),
            access_level: None,
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for ResponseList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Deref for ResponseList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for ResponseList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResponseList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A cursor-paged [`ResponseList`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagableResponseList<T> {
    pub list: ResponseList<T>,
    pub previous_cursor: i64,
    pub next_cursor: i64,
}

impl<T> PagableResponseList<T> {
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next_cursor != 0
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.previous_cursor != 0
    }
}

impl<T> Deref for PagableResponseList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.list.items
    }
}

/// Cursor value requesting the first page.
pub const START_CURSOR: i64 = -1;

// ─────────────────────────────────────────────────────────────────────────────
// Statuses
// ─────────────────────────────────────────────────────────────────────────────

/// A status (tweet) from the REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: u64,

    #[serde(default)]
    pub text: String,

    #[serde(with = "twitter_date")]
    pub created_at: DateTime<Utc>,

    /// Client that posted the status (HTML anchor)
    #[serde(default)]
    pub source: String,

    #[serde(default)]
    pub truncated: bool,

    #[serde(default)]
    pub in_reply_to_status_id: Option<u64>,

    #[serde(default)]
    pub in_reply_to_user_id: Option<u64>,

    #[serde(default)]
    pub in_reply_to_screen_name: Option<String>,

    #[serde(default)]
    pub favorited: bool,

    #[serde(default)]
    pub retweeted: bool,

    #[serde(default, deserialize_with = "lenient_count")]
    pub retweet_count: u64,

    #[serde(default)]
    pub possibly_sensitive: Option<bool>,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub retweeted_status: Option<Box<Status>>,

    /// The authenticating user's retweet of this status
    #[serde(default)]
    pub current_user_retweet: Option<StatusRef>,

    #[serde(default)]
    pub geo: Option<Geometry>,

    #[serde(default)]
    pub place: Option<Place>,

    #[serde(default)]
    pub contributors: Option<Vec<u64>>,

    #[serde(default)]
    pub entities: Option<Entities>,
}

impl Status {
    /// Whether this status is a retweet of another.
    #[must_use]
    pub const fn is_retweet(&self) -> bool {
        self.retweeted_status.is_some()
    }

    /// Point location attached to the status.
    #[must_use]
    pub fn geo_location(&self) -> Option<GeoLocation> {
        self.geo.as_ref().and_then(Geometry::point)
    }
}

/// Reference to a status by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRef {
    pub id: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// A user profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub screen_name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub profile_image_url: Option<String>,
    pub profile_image_url_https: Option<String>,
    pub protected: bool,
    pub verified: bool,
    pub geo_enabled: bool,
    pub contributors_enabled: bool,
    pub is_translator: bool,
    pub followers_count: u64,
    pub friends_count: u64,
    pub favourites_count: u64,
    pub statuses_count: u64,
    pub listed_count: u64,
    #[serde(with = "twitter_date::option")]
    pub created_at: Option<DateTime<Utc>>,
    pub utc_offset: Option<i32>,
    pub time_zone: Option<String>,
    pub lang: Option<String>,
    pub following: Option<bool>,
    pub follow_request_sent: Option<bool>,
    pub notifications: Option<bool>,
    pub profile_background_color: Option<String>,
    pub profile_background_image_url: Option<String>,
    pub profile_background_tile: Option<bool>,
    pub profile_text_color: Option<String>,
    pub profile_link_color: Option<String>,
    pub profile_sidebar_fill_color: Option<String>,
    pub profile_sidebar_border_color: Option<String>,
    pub profile_use_background_image: Option<bool>,
    /// Most recent status, when the endpoint embeds it
    pub status: Option<Box<Status>>,
}

/// A suggested-users category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub size: u32,
}

// ─────────────────────────────────────────────────────────────────────────────
// Direct messages
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectMessage {
    pub id: u64,
    #[serde(default)]
    pub text: String,
    #[serde(with = "twitter_date")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub sender_id: u64,
    #[serde(default)]
    pub sender_screen_name: String,
    #[serde(default)]
    pub recipient_id: u64,
    #[serde(default)]
    pub recipient_screen_name: String,
    #[serde(default)]
    pub sender: Option<User>,
    #[serde(default)]
    pub recipient: Option<User>,
    #[serde(default)]
    pub entities: Option<Entities>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Lists
// ─────────────────────────────────────────────────────────────────────────────

/// A user list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserList {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subscriber_count: u32,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub uri: String,
    /// `public` or `private`
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub following: bool,
    #[serde(default)]
    pub user: Option<User>,
}

impl UserList {
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.mode == "public"
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Friendships
// ─────────────────────────────────────────────────────────────────────────────

/// Relationship between two users, from `friendships/show`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub source: RelationshipUser,
    pub target: RelationshipUser,
}

/// One side of a [`Relationship`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipUser {
    pub id: u64,
    pub screen_name: String,
    pub following: bool,
    pub followed_by: bool,
    pub notifications_enabled: Option<bool>,
    pub blocking: Option<bool>,
    pub want_retweets: Option<bool>,
    pub all_replies: Option<bool>,
    pub marked_spam: Option<bool>,
    pub can_dm: Option<bool>,
}

/// Connection summary from `friendships/lookup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friendship {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub screen_name: String,
    /// `following`, `following_requested`, `followed_by`, `none`
    #[serde(default)]
    pub connections: Vec<String>,
}

impl Friendship {
    fn has(&self, connection: &str) -> bool {
        self.connections.iter().any(|c| c == connection)
    }

    #[must_use]
    pub fn is_following(&self) -> bool {
        self.has("following")
    }

    #[must_use]
    pub fn is_followed_by(&self) -> bool {
        self.has("followed_by")
    }
}

/// A page of user ids.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ids {
    pub ids: Vec<u64>,
    #[serde(default)]
    pub previous_cursor: i64,
    #[serde(default)]
    pub next_cursor: i64,
}

impl Ids {
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next_cursor != 0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Trends
// ─────────────────────────────────────────────────────────────────────────────

/// A set of trends valid at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trends {
    #[serde(with = "twitter_date")]
    pub as_of: DateTime<Utc>,
    /// Time slot the trends belong to (daily/weekly trends)
    #[serde(default, with = "twitter_date::option")]
    pub trend_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub trends: Vec<Trend>,
    #[serde(default)]
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    pub name: String,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A location trends are available for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub woeid: u64,
    pub name: String,
    pub country: Option<String>,
    #[serde(rename = "countryCode")]
    pub country_code: Option<String>,
    #[serde(rename = "placeType")]
    pub place_type: Option<PlaceType>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceType {
    pub code: u32,
    pub name: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Geo
// ─────────────────────────────────────────────────────────────────────────────

/// Latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// GeoJSON-ish geometry as the API embeds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: serde_json::Value,
}

impl Geometry {
    /// `Point` geometries as a location. The `geo` field orders
    /// coordinates latitude first.
    #[must_use]
    pub fn point(&self) -> Option<GeoLocation> {
        if self.kind != "Point" {
            return None;
        }
        let coords = self.coordinates.as_array()?;
        Some(GeoLocation::new(
            coords.first()?.as_f64()?,
            coords.get(1)?.as_f64()?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub place_type: Option<String>,
    pub url: Option<String>,
    pub attributes: BTreeMap<String, serde_json::Value>,
    pub bounding_box: Option<Geometry>,
    pub geometry: Option<Geometry>,
    pub contained_within: Vec<Place>,
}

impl Place {
    #[must_use]
    pub fn street_address(&self) -> Option<&str> {
        self.attributes.get("street_address")?.as_str()
    }
}

/// Candidates from `geo/similar_places` plus the token needed to create a place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimilarPlaces {
    pub places: Vec<Place>,
    pub token: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub position: Option<i32>,
    #[serde(default, with = "twitter_date::option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Result page from the search API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryResult {
    pub results: Vec<Tweet>,
    pub since_id: u64,
    pub max_id: u64,
    pub refresh_url: Option<String>,
    pub next_page: Option<String>,
    pub results_per_page: u32,
    pub page: u32,
    pub completed_in: f64,
    pub query: String,
}

/// A search API result. Shaped differently from [`Status`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: u64,
    #[serde(default)]
    pub text: String,
    #[serde(with = "twitter_date")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub from_user: String,
    #[serde(default)]
    pub from_user_id: u64,
    #[serde(default)]
    pub from_user_name: Option<String>,
    #[serde(default)]
    pub to_user: Option<String>,
    #[serde(default)]
    pub to_user_id: Option<u64>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub iso_language_code: Option<String>,
    #[serde(default)]
    pub geo: Option<Geometry>,
    #[serde(default)]
    pub entities: Option<Entities>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Entities
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Entities {
    pub hashtags: Vec<HashtagEntity>,
    pub urls: Vec<UrlEntity>,
    pub user_mentions: Vec<UserMentionEntity>,
    pub media: Vec<MediaEntity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagEntity {
    pub text: String,
    #[serde(default)]
    pub indices: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntity {
    pub url: String,
    #[serde(default)]
    pub expanded_url: Option<String>,
    #[serde(default)]
    pub display_url: Option<String>,
    #[serde(default)]
    pub indices: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMentionEntity {
    pub id: u64,
    pub screen_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub indices: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEntity {
    pub id: u64,
    pub media_url: String,
    #[serde(default)]
    pub media_url_https: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display_url: Option<String>,
    #[serde(default)]
    pub expanded_url: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub sizes: BTreeMap<String, MediaSize>,
    #[serde(default)]
    pub indices: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSize {
    pub w: u32,
    pub h: u32,
    #[serde(default)]
    pub resize: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Account & help
// ─────────────────────────────────────────────────────────────────────────────

/// Result of `account/rate_limit_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitStatus {
    pub remaining_hits: u32,
    pub hourly_limit: u32,
    pub reset_time_in_seconds: i64,
    #[serde(default, with = "twitter_date::option")]
    pub reset_time: Option<DateTime<Utc>>,
}

impl RateLimitStatus {
    /// Seconds until the window resets, zero when already past.
    #[must_use]
    pub fn seconds_until_reset(&self) -> i64 {
        (self.reset_time_in_seconds - Utc::now().timestamp()).max(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettings {
    pub screen_name: Option<String>,
    pub protected: bool,
    pub geo_enabled: bool,
    pub language: Option<String>,
    pub always_use_https: bool,
    pub discoverable_by_email: bool,
    pub sleep_time: SleepTime,
    pub time_zone: Option<TimeZone>,
    pub trend_location: Vec<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SleepTime {
    pub enabled: bool,
    pub start_time: Option<u32>,
    pub end_time: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeZone {
    pub name: String,
    pub utc_offset: i32,
    pub tzinfo_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountTotals {
    pub updates: u64,
    pub followers: u64,
    pub favorites: u64,
    pub friends: u64,
}

/// Result of `help/configuration`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfiguration {
    pub photo_size_limit: u64,
    pub short_url_length: u32,
    pub short_url_length_https: u32,
    pub characters_reserved_per_media: u32,
    pub max_media_per_upload: u32,
    pub non_username_paths: Vec<String>,
    pub photo_sizes: BTreeMap<String, MediaSize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Conversation context from the undocumented `related_results` endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RelatedResults {
    pub tweets_with_conversation: Vec<Status>,
    pub tweets_with_reply: Vec<Status>,
    pub tweets_from_user: Vec<Status>,
}

/// Redirect target of `users/profile_image`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileImage {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    #[test]
    fn test_parse_rest_date() {
        let date = twitter_date::parse("Wed Aug 27 13:08:45 +0000 2008").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2008, 8, 27, 13, 8, 45).unwrap());
    }

    #[test]
    fn test_parse_search_date() {
        let date = twitter_date::parse("Wed, 27 Aug 2008 13:08:45 +0000").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2008, 8, 27, 13, 8, 45).unwrap());
        assert!(twitter_date::parse("2012-08-24T23:25:43Z").is_some());
        assert!(twitter_date::parse("yesterday").is_none());
    }

    #[test]
    fn test_status_deserialize() {
        let status: Status = serde_json::from_value(serde_json::json!({
            "id": 240859602684612608_u64,
            "text": "Introducing the Twitter Certified Products Program",
            "created_at": "Wed Aug 29 17:12:58 +0000 2012",
            "source": "web",
            "retweet_count": "100+",
            "geo": {"type": "Point", "coordinates": [37.78, -122.39]},
            "current_user_retweet": {"id": 42, "id_str": "42"},
            "user": {"id": 6253282, "screen_name": "twitterapi", "name": "Twitter API"},
            "entities": {
                "hashtags": [{"text": "rust", "indices": [0, 5]}],
                "urls": [],
                "user_mentions": []
            }
        }))
        .unwrap();

        assert_eq!(status.retweet_count, 100);
        assert_eq!(status.user.as_ref().unwrap().screen_name, "twitterapi");
        assert_eq!(status.current_user_retweet, Some(StatusRef { id: 42 }));
        assert_eq!(status.geo_location(), Some(GeoLocation::new(37.78, -122.39)));
        assert_eq!(status.entities.as_ref().unwrap().hashtags[0].text, "rust");
        assert!(!status.is_retweet());
    }

    #[test]
    fn test_user_tolerates_missing_fields() {
        let user: User = serde_json::from_value(serde_json::json!({"id": 12})).unwrap();
        assert_eq!(user.id, 12);
        assert!(user.screen_name.is_empty());
        assert_eq!(user.created_at, None);
    }

    #[test]
    fn test_friendship_connections() {
        let friendship: Friendship = serde_json::from_value(serde_json::json!({
            "id": 1, "screen_name": "a", "name": "A", "connections": ["following", "followed_by"]
        }))
        .unwrap();
        assert!(friendship.is_following());
        assert!(friendship.is_followed_by());
    }

    #[test]
    fn test_place_street_address() {
        let place: Place = serde_json::from_value(serde_json::json!({
            "id": "247f43d441defc03",
            "name": "Twitter HQ",
            "full_name": "Twitter HQ, San Francisco",
            "attributes": {"street_address": "795 Folsom St"}
        }))
        .unwrap();
        assert_eq!(place.street_address(), Some("795 Folsom St"));
    }

    #[test]
    fn test_trends_epoch_as_of() {
        let trends: Trends = serde_json::from_value(serde_json::json!({
            "as_of": 1_345_766_400,
            "trends": [{"name": "#rust"}]
        }))
        .unwrap();
        assert_eq!(trends.as_of.timestamp(), 1_345_766_400);
        assert_eq!(trends.trends[0].query, None);
    }
}
