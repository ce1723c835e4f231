//! Trend endpoints.

use chrono::NaiveDate;

use crate::TwitterClient;
use crate::error::TwitterResult;
use crate::factory;
use crate::http::Params;
use crate::types::{GeoLocation, Location, ResponseList, Trends};

impl TwitterClient {
    /// Locations with trending topics, ordered by distance from `near` when given.
    pub async fn available_trends(
        &self,
        near: Option<GeoLocation>,
    ) -> TwitterResult<ResponseList<Location>> {
        let mut params = Params::new();
        if let Some(location) = near {
            params.push("lat", location.latitude);
            params.push("long", location.longitude);
        }
        let response = self
            .get(&self.rest_url("trends/available.json"), params)
            .await?;
        factory::list(&response)
    }

    /// Current top ten trends for a Yahoo! Where On Earth id.
    pub async fn location_trends(&self, woeid: u64) -> TwitterResult<Trends> {
        let url = self.rest_url_with("trends/{woeid}.json", woeid);
        let response = self.get(&url, Params::new()).await?;
        factory::trends(&response)
    }

    /// Top trends for each hour of a day. Without `date`, the service picks
    /// the most recent day.
    pub async fn daily_trends(
        &self,
        date: Option<NaiveDate>,
        exclude_hashtags: bool,
    ) -> TwitterResult<ResponseList<Trends>> {
        self.dated_trends("trends/daily.json", date, exclude_hashtags)
            .await
    }

    /// Top trends for each day of a week.
    pub async fn weekly_trends(
        &self,
        date: Option<NaiveDate>,
        exclude_hashtags: bool,
    ) -> TwitterResult<ResponseList<Trends>> {
        self.dated_trends("trends/weekly.json", date, exclude_hashtags)
            .await
    }

    async fn dated_trends(
        &self,
        path: &str,
        date: Option<NaiveDate>,
        exclude_hashtags: bool,
    ) -> TwitterResult<ResponseList<Trends>> {
        let mut params =
            Params::new().with_opt("date", date.map(|d| d.format("%Y-%m-%d").to_string()));
        if exclude_hashtags {
            params.push("exclude", "hashtags");
        }
        let response = self.get(&self.rest_url(path), params).await?;
        factory::trends_list(&response)
    }
}
