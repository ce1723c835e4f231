//! Request-side value types.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use bytes::Bytes;
use chrono::NaiveDate;

use crate::error::{TwitterError, TwitterResult};
use crate::http::Params;
use crate::types::GeoLocation;

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// A user addressed by numeric id or by screen name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserRef {
    Id(u64),
    ScreenName(String),
}

impl UserRef {
    pub(crate) fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.push_into(&mut params);
        params
    }

    /// Path segment for endpoints addressed as `resource/{id}.json`.
    pub(crate) fn path_segment(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::ScreenName(name) => name.clone(),
        }
    }

    /// Push `user_id` or `screen_name`.
    pub(crate) fn push_into(&self, params: &mut Params) {
        match self {
            Self::Id(id) => params.push("user_id", id),
            Self::ScreenName(name) => params.push("screen_name", name),
        }
    }

    /// Push `{prefix}_id` or `{prefix}_screen_name` (e.g. `source_id`).
    pub(crate) fn push_prefixed(&self, prefix: &str, params: &mut Params) {
        match self {
            Self::Id(id) => params.push(&format!("{prefix}_id"), id),
            Self::ScreenName(name) => params.push(&format!("{prefix}_screen_name"), name),
        }
    }

    /// Split a mixed slice into comma-joined `user_id` and `screen_name` values.
    pub(crate) fn push_all(users: &[Self], params: &mut Params) {
        let ids: Vec<String> = users
            .iter()
            .filter_map(|u| match u {
                Self::Id(id) => Some(id.to_string()),
                Self::ScreenName(_) => None,
            })
            .collect();
        let names: Vec<&str> = users
            .iter()
            .filter_map(|u| match u {
                Self::ScreenName(name) => Some(name.as_str()),
                Self::Id(_) => None,
            })
            .collect();

        if !ids.is_empty() {
            params.push("user_id", ids.join(","));
        }
        if !names.is_empty() {
            params.push("screen_name", names.join(","));
        }
    }
}

impl From<u64> for UserRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for UserRef {
    fn from(name: &str) -> Self {
        Self::ScreenName(name.trim_start_matches('@').to_string())
    }
}

impl From<String> for UserRef {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl FromStr for UserRef {
    type Err = std::convert::Infallible;

    /// All-digit input is an id, anything else a screen name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<u64>().map_or_else(|_| Self::from(s), Self::Id))
    }
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::ScreenName(name) => write!(f, "@{name}"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Paging
// ─────────────────────────────────────────────────────────────────────────────

/// Page/count/id window for timeline endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paging {
    pub page: Option<u32>,
    pub count: Option<u32>,
    pub since_id: Option<u64>,
    pub max_id: Option<u64>,
}

impl Paging {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub const fn since_id(mut self, since_id: u64) -> Self {
        self.since_id = Some(since_id);
        self
    }

    #[must_use]
    pub const fn max_id(mut self, max_id: u64) -> Self {
        self.max_id = Some(max_id);
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.push_into(&mut params);
        params
    }

    pub(crate) fn push_into(&self, params: &mut Params) {
        self.push_with_count_key("count", params);
    }

    /// List statuses take the page size as `per_page`.
    pub(crate) fn push_per_page(&self, params: &mut Params) {
        self.push_with_count_key("per_page", params);
    }

    fn push_with_count_key(&self, count_key: &str, params: &mut Params) {
        params.push_opt("page", self.page);
        params.push_opt(count_key, self.count);
        params.push_opt("since_id", self.since_id);
        params.push_opt("max_id", self.max_id);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Statuses
// ─────────────────────────────────────────────────────────────────────────────

/// A status to post, optionally with media.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    pub status: String,
    pub in_reply_to_status_id: Option<u64>,
    pub location: Option<GeoLocation>,
    pub place_id: Option<String>,
    pub display_coordinates: Option<bool>,
    pub possibly_sensitive: Option<bool>,
    pub media: Option<ImageUpload>,
}

impl StatusUpdate {
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            in_reply_to_status_id: None,
            location: None,
            place_id: None,
            display_coordinates: None,
            possibly_sensitive: None,
            media: None,
        }
    }

    #[must_use]
    pub const fn in_reply_to(mut self, status_id: u64) -> Self {
        self.in_reply_to_status_id = Some(status_id);
        self
    }

    #[must_use]
    pub const fn location(mut self, location: GeoLocation) -> Self {
        self.location = Some(location);
        self
    }

    #[must_use]
    pub fn place_id(mut self, place_id: impl Into<String>) -> Self {
        self.place_id = Some(place_id.into());
        self
    }

    #[must_use]
    pub const fn display_coordinates(mut self, display: bool) -> Self {
        self.display_coordinates = Some(display);
        self
    }

    #[must_use]
    pub const fn possibly_sensitive(mut self, sensitive: bool) -> Self {
        self.possibly_sensitive = Some(sensitive);
        self
    }

    #[must_use]
    pub fn media(mut self, media: ImageUpload) -> Self {
        self.media = Some(media);
        self
    }

    #[must_use]
    pub const fn has_media(&self) -> bool {
        self.media.is_some()
    }

    pub(crate) fn into_params(self) -> Params {
        let mut params = Params::new()
            .with("status", &self.status)
            .with_opt("in_reply_to_status_id", self.in_reply_to_status_id);
        if let Some(location) = self.location {
            params.push("lat", location.latitude);
            params.push("long", location.longitude);
        }
        params.push_opt("place_id", self.place_id);
        params.push_opt("display_coordinates", self.display_coordinates);
        params.push_opt("possibly_sensitive", self.possibly_sensitive);
        match self.media {
            Some(media) => params.with_file("media[]", media),
            None => params,
        }
    }
}

impl From<&str> for StatusUpdate {
    fn from(status: &str) -> Self {
        Self::new(status)
    }
}

impl From<String> for StatusUpdate {
    fn from(status: String) -> Self {
        Self::new(status)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────────────────

/// Search API result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultType {
    Mixed,
    Recent,
    Popular,
}

impl ResultType {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Mixed => "mixed",
            Self::Recent => "recent",
            Self::Popular => "popular",
        }
    }
}

/// Unit for a geocode radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Kilometers,
    Miles,
}

/// Search API query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    pub query: String,
    pub lang: Option<String>,
    pub locale: Option<String>,
    pub max_id: Option<u64>,
    pub since_id: Option<u64>,
    /// Results per page
    pub rpp: Option<u32>,
    pub page: Option<u32>,
    /// `YYYY-MM-DD`
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
    pub geocode: Option<(GeoLocation, f64, DistanceUnit)>,
    pub result_type: Option<ResultType>,
}

impl Query {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    #[must_use]
    pub const fn rpp(mut self, rpp: u32) -> Self {
        self.rpp = Some(rpp);
        self
    }

    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub const fn since_id(mut self, since_id: u64) -> Self {
        self.since_id = Some(since_id);
        self
    }

    #[must_use]
    pub const fn max_id(mut self, max_id: u64) -> Self {
        self.max_id = Some(max_id);
        self
    }

    #[must_use]
    pub const fn geocode(mut self, location: GeoLocation, radius: f64, unit: DistanceUnit) -> Self {
        self.geocode = Some((location, radius, unit));
        self
    }

    #[must_use]
    pub const fn result_type(mut self, result_type: ResultType) -> Self {
        self.result_type = Some(result_type);
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("q", &self.query)
            .with_opt("lang", self.lang.as_deref())
            .with_opt("locale", self.locale.as_deref())
            .with_opt("max_id", self.max_id)
            .with_opt("rpp", self.rpp)
            .with_opt("page", self.page)
            .with_opt("since", self.since.map(|d| d.format("%Y-%m-%d")))
            .with_opt("since_id", self.since_id);
        if let Some((location, radius, unit)) = self.geocode {
            let unit = match unit {
                DistanceUnit::Kilometers => "km",
                DistanceUnit::Miles => "mi",
            };
            params.push(
                "geocode",
                format!("{},{},{radius}{unit}", location.latitude, location.longitude),
            );
        }
        params.push_opt("until", self.until.map(|d| d.format("%Y-%m-%d")));
        params.push_opt("result_type", self.result_type.map(ResultType::as_str));
        params
    }
}

/// Query for the geo search and reverse geocode endpoints.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeoQuery {
    pub location: Option<GeoLocation>,
    pub ip: Option<String>,
    pub query: Option<String>,
    /// Radius in meters, or with a `ft` suffix
    pub accuracy: Option<String>,
    /// `poi`, `neighborhood`, `city`, `admin` or `country`
    pub granularity: Option<String>,
    pub max_results: Option<u32>,
}

impl GeoQuery {
    #[must_use]
    pub fn at(location: GeoLocation) -> Self {
        Self {
            location: Some(location),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn ip(ip: impl Into<String>) -> Self {
        Self {
            ip: Some(ip.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    #[must_use]
    pub fn accuracy(mut self, accuracy: impl Into<String>) -> Self {
        self.accuracy = Some(accuracy.into());
        self
    }

    #[must_use]
    pub fn granularity(mut self, granularity: impl Into<String>) -> Self {
        self.granularity = Some(granularity.into());
        self
    }

    #[must_use]
    pub const fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(location) = self.location {
            params.push("lat", location.latitude);
            params.push("long", location.longitude);
        }
        params.push_opt("ip", self.ip.as_deref());
        params.push_opt("query", self.query.as_deref());
        params.push_opt("accuracy", self.accuracy.as_deref());
        params.push_opt("granularity", self.granularity.as_deref());
        params.push_opt("max_results", self.max_results);
        params
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Account
// ─────────────────────────────────────────────────────────────────────────────

/// Fields for `account/update_profile`; unset fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl ProfileUpdate {
    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with_opt("name", self.name.as_deref())
            .with_opt("url", self.url.as_deref())
            .with_opt("location", self.location.as_deref())
            .with_opt("description", self.description.as_deref())
    }
}

/// Fields for `account/update_profile_colors`, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileColors {
    pub background: Option<String>,
    pub text: Option<String>,
    pub link: Option<String>,
    pub sidebar_fill: Option<String>,
    pub sidebar_border: Option<String>,
}

impl ProfileColors {
    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with_opt("profile_background_color", self.background.as_deref())
            .with_opt("profile_text_color", self.text.as_deref())
            .with_opt("profile_link_color", self.link.as_deref())
            .with_opt("profile_sidebar_fill_color", self.sidebar_fill.as_deref())
            .with_opt("profile_sidebar_border_color", self.sidebar_border.as_deref())
    }
}

/// Fields for `account/settings` (POST).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountSettingsUpdate {
    pub trend_location_woeid: Option<u64>,
    pub sleep_time_enabled: Option<bool>,
    /// Hour of day, 00-23
    pub start_sleep_time: Option<String>,
    pub end_sleep_time: Option<String>,
    pub time_zone: Option<String>,
    pub lang: Option<String>,
}

impl AccountSettingsUpdate {
    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with_opt("trend_location_woeid", self.trend_location_woeid)
            .with_opt("sleep_time_enabled", self.sleep_time_enabled)
            .with_opt("start_sleep_time", self.start_sleep_time.as_deref())
            .with_opt("end_sleep_time", self.end_sleep_time.as_deref())
            .with_opt("time_zone", self.time_zone.as_deref())
            .with_opt("lang", self.lang.as_deref())
    }
}

/// New list attributes for `lists/create` and `lists/update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListUpdate {
    pub name: Option<String>,
    pub public: bool,
    pub description: Option<String>,
}

impl ListUpdate {
    pub(crate) fn push_into(&self, params: &mut Params) {
        params.push_opt("name", self.name.as_deref());
        params.push("mode", if self.public { "public" } else { "private" });
        params.push_opt("description", self.description.as_deref());
    }
}

/// Size variant for `users/profile_image`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileImageSize {
    Bigger,
    #[default]
    Normal,
    Mini,
    Original,
}

impl ProfileImageSize {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bigger => "bigger",
            Self::Normal => "normal",
            Self::Mini => "mini",
            Self::Original => "original",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Uploads
// ─────────────────────────────────────────────────────────────────────────────

/// Image bytes for a multipart upload.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.data.len())
            .finish()
    }
}

impl ImageUpload {
    /// Upload from memory. The content type is guessed from the name.
    #[must_use]
    pub fn from_bytes(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        Self {
            content_type: guess_content_type(&file_name).to_string(),
            file_name,
            data: data.into(),
        }
    }

    /// Read an image from disk.
    ///
    /// Fails with [`TwitterError::InvalidFile`] if the path does not exist
    /// or is not a regular file.
    pub async fn from_path(path: impl AsRef<Path>) -> TwitterResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TwitterError::invalid_file(display, "not found"));
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_file() {
            return Err(TwitterError::invalid_file(display, "not a file"));
        }

        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "image".to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self::from_bytes(file_name, data))
    }
}

fn guess_content_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}
