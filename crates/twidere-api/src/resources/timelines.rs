//! Timeline endpoints.

use tracing::instrument;

use crate::TwitterClient;
use crate::error::TwitterResult;
use crate::factory;
use crate::http::Params;
use crate::params::{Paging, UserRef};
use crate::types::{ResponseList, Status};

impl TwitterClient {
    /// Most recent public statuses.
    pub async fn public_timeline(&self) -> TwitterResult<ResponseList<Status>> {
        let params = self.rts(self.entities(Self::my_retweet(Params::new())));
        let response = self
            .get(&self.rest_url("statuses/public_timeline.json"), params)
            .await?;
        factory::list(&response)
    }

    /// Statuses from the authenticating user and the users they follow,
    /// retweets included.
    #[instrument(skip(self))]
    pub async fn home_timeline(&self, paging: Paging) -> TwitterResult<ResponseList<Status>> {
        self.ensure_authorized()?;
        let params = Self::my_retweet(self.entities(paging.to_params()));
        let response = self
            .get(&self.rest_url("statuses/home_timeline.json"), params)
            .await?;
        factory::list(&response)
    }

    /// Like [`home_timeline`](Self::home_timeline), with retweets governed
    /// by `include_rts`.
    pub async fn friends_timeline(&self, paging: Paging) -> TwitterResult<ResponseList<Status>> {
        self.ensure_authorized()?;
        let mut params = Self::my_retweet(self.entities(self.rts(Params::new())));
        paging.push_into(&mut params);
        let response = self
            .get(&self.rest_url("statuses/friends_timeline.json"), params)
            .await?;
        factory::list(&response)
    }

    /// Statuses posted by `user`, or by the authenticating user when `None`.
    #[instrument(skip(self))]
    pub async fn user_timeline(
        &self,
        user: Option<&UserRef>,
        paging: Paging,
    ) -> TwitterResult<ResponseList<Status>> {
        let mut params = match user {
            Some(user) => user.to_params(),
            None => {
                self.ensure_authorized()?;
                Params::new()
            }
        };
        params = Self::my_retweet(self.entities(self.rts(params)));
        paging.push_into(&mut params);
        let response = self
            .get(&self.rest_url("statuses/user_timeline.json"), params)
            .await?;
        factory::list(&response)
    }

    /// Statuses mentioning the authenticating user.
    #[instrument(skip(self))]
    pub async fn mentions(&self, paging: Paging) -> TwitterResult<ResponseList<Status>> {
        self.ensure_authorized()?;
        let mut params = self.entities(self.rts(Params::new()));
        paging.push_into(&mut params);
        let response = self
            .get(&self.rest_url("statuses/mentions.json"), params)
            .await?;
        factory::list(&response)
    }

    pub async fn retweeted_by_me(&self, paging: Paging) -> TwitterResult<ResponseList<Status>> {
        self.ensure_authorized()?;
        self.paged_statuses("statuses/retweeted_by_me.json", paging)
            .await
    }

    pub async fn retweeted_to_me(&self, paging: Paging) -> TwitterResult<ResponseList<Status>> {
        self.ensure_authorized()?;
        self.paged_statuses("statuses/retweeted_to_me.json", paging)
            .await
    }

    /// The authenticating user's statuses that others retweeted.
    pub async fn retweets_of_me(&self, paging: Paging) -> TwitterResult<ResponseList<Status>> {
        self.ensure_authorized()?;
        self.paged_statuses("statuses/retweets_of_me.json", paging)
            .await
    }

    /// Retweets posted by `user`.
    pub async fn retweeted_by_user(
        &self,
        user: &UserRef,
        paging: Paging,
    ) -> TwitterResult<ResponseList<Status>> {
        let mut params = paging.to_params();
        user.push_into(&mut params);
        let response = self
            .get(
                &self.rest_url("statuses/retweeted_by_user.json"),
                self.entities(params),
            )
            .await?;
        factory::list(&response)
    }

    /// Retweets posted by users `user` follows.
    pub async fn retweeted_to_user(
        &self,
        user: &UserRef,
        paging: Paging,
    ) -> TwitterResult<ResponseList<Status>> {
        let mut params = paging.to_params();
        user.push_into(&mut params);
        let response = self
            .get(
                &self.rest_url("statuses/retweeted_to_user.json"),
                self.entities(params),
            )
            .await?;
        factory::list(&response)
    }

    async fn paged_statuses(
        &self,
        path: &str,
        paging: Paging,
    ) -> TwitterResult<ResponseList<Status>> {
        let params = self.entities(paging.to_params());
        let response = self.get(&self.rest_url(path), params).await?;
        factory::list(&response)
    }
}
