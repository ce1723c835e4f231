//! Status and favorite endpoints.

use tracing::{debug, instrument};

use crate::TwitterClient;
use crate::error::TwitterResult;
use crate::factory;
use crate::http::Params;
use crate::params::{Paging, StatusUpdate, UserRef};
use crate::types::{Ids, ResponseList, Status, User};

/// Paging used when retweeters are requested without one.
const RETWEETERS_PAGING: Paging = Paging {
    page: Some(1),
    count: Some(100),
    since_id: None,
    max_id: None,
};

impl TwitterClient {
    #[instrument(skip(self))]
    pub async fn show_status(&self, id: u64) -> TwitterResult<Status> {
        let url = self.rest_url_with("statuses/show/{id}.json", id);
        let response = self.get(&url, self.entities(Params::new())).await?;
        factory::object(&response)
    }

    /// Post a status.
    ///
    /// Updates carrying media are sent as multipart to
    /// `statuses/update_with_media.json` on the upload host.
    #[instrument(skip(self, update))]
    pub async fn update_status(&self, update: impl Into<StatusUpdate>) -> TwitterResult<Status> {
        self.ensure_authorized()?;
        let update = update.into();
        let url = if update.has_media() {
            self.upload_url("statuses/update_with_media.json")
        } else {
            self.rest_url("statuses/update.json")
        };
        debug!(media = update.has_media(), "Posting status");
        let response = self.post(&url, self.entities(update.into_params())).await?;
        factory::object(&response)
    }

    #[instrument(skip(self))]
    pub async fn destroy_status(&self, id: u64) -> TwitterResult<Status> {
        self.ensure_authorized()?;
        let url = self.rest_url_with("statuses/destroy/{id}.json", id);
        let response = self.post(&url, self.entities(Params::new())).await?;
        factory::object(&response)
    }

    /// Retweet a status. Returns the new retweet.
    #[instrument(skip(self))]
    pub async fn retweet_status(&self, id: u64) -> TwitterResult<Status> {
        self.ensure_authorized()?;
        let url = self.rest_url_with("statuses/retweet/{id}.json", id);
        let response = self.post(&url, self.entities(Params::new())).await?;
        factory::object(&response)
    }

    /// Up to 100 retweets of a status.
    pub async fn retweets(&self, id: u64) -> TwitterResult<ResponseList<Status>> {
        self.ensure_authorized()?;
        let url = self.rest_url_with("statuses/retweets/{id}.json", id);
        let response = self
            .get(&url, self.entities(Params::new().with("count", 100)))
            .await?;
        factory::list(&response)
    }

    /// Users who retweeted a status; first 100 when `paging` is `None`.
    pub async fn retweeted_by(
        &self,
        id: u64,
        paging: Option<Paging>,
    ) -> TwitterResult<ResponseList<User>> {
        let paging = paging.unwrap_or(RETWEETERS_PAGING);
        let url = self.rest_url_with("statuses/{id}/retweeted_by.json", id);
        let response = self.get(&url, paging.to_params()).await?;
        factory::list(&response)
    }

    /// Ids of users who retweeted a status; first 100 when `paging` is `None`.
    pub async fn retweeted_by_ids(&self, id: u64, paging: Option<Paging>) -> TwitterResult<Ids> {
        self.ensure_authorized()?;
        let paging = paging.unwrap_or(RETWEETERS_PAGING);
        let url = self.rest_url_with("statuses/{id}/retweeted_by/ids.json", id);
        let response = self.get(&url, paging.to_params()).await?;
        factory::ids(&response)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Favorites
    // ─────────────────────────────────────────────────────────────────────────

    /// Favorites of `user`, or of the authenticating user when `None`.
    pub async fn favorites(
        &self,
        user: Option<&UserRef>,
        paging: Paging,
    ) -> TwitterResult<ResponseList<Status>> {
        self.ensure_authorized()?;
        let url = match user {
            Some(user) => self.rest_url_with("favorites/{user}.json", user.path_segment()),
            None => self.rest_url("favorites.json"),
        };
        let response = self.get(&url, self.entities(paging.to_params())).await?;
        factory::list(&response)
    }

    #[instrument(skip(self))]
    pub async fn create_favorite(&self, id: u64) -> TwitterResult<Status> {
        self.ensure_authorized()?;
        let url = self.rest_url_with("favorites/create/{id}.json", id);
        let response = self.post(&url, self.entities(Params::new())).await?;
        factory::object(&response)
    }

    #[instrument(skip(self))]
    pub async fn destroy_favorite(&self, id: u64) -> TwitterResult<Status> {
        self.ensure_authorized()?;
        let url = self.rest_url_with("favorites/destroy/{id}.json", id);
        let response = self.post(&url, self.entities(Params::new())).await?;
        factory::object(&response)
    }
}
