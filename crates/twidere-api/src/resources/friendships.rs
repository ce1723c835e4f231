//! Friendship, social graph and notification endpoints.

use tracing::{debug, instrument};

use crate::TwitterClient;
use crate::error::TwitterResult;
use crate::factory;
use crate::http::Params;
use crate::params::UserRef;
use crate::types::{Friendship, Ids, PagableResponseList, Relationship, ResponseList, User};

impl TwitterClient {
    /// Follow `user`. `follow` also enables device notifications.
    #[instrument(skip(self))]
    pub async fn create_friendship(
        &self,
        user: &UserRef,
        follow: Option<bool>,
    ) -> TwitterResult<User> {
        self.ensure_authorized()?;
        let params = self
            .entities(user.to_params())
            .with_opt("follow", follow);
        let response = self
            .post(&self.rest_url("friendships/create.json"), params)
            .await?;
        factory::object(&response)
    }

    #[instrument(skip(self))]
    pub async fn destroy_friendship(&self, user: &UserRef) -> TwitterResult<User> {
        self.ensure_authorized()?;
        let response = self
            .post(
                &self.rest_url("friendships/destroy.json"),
                self.entities(user.to_params()),
            )
            .await?;
        factory::object(&response)
    }

    /// Whether `user_a` follows `user_b`. A 404 means no.
    pub async fn exists_friendship(&self, user_a: &str, user_b: &str) -> TwitterResult<bool> {
        let params = Params::new().with("user_a", user_a).with("user_b", user_b);
        match self
            .get(&self.rest_url("friendships/exists.json"), params)
            .await
        {
            Ok(response) => factory::contains(&response, "true"),
            Err(e) if e.is_not_found() => {
                debug!(user_a, user_b, "friendships/exists answered 404");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Detailed relationship between two users.
    pub async fn show_friendship(
        &self,
        source: &UserRef,
        target: &UserRef,
    ) -> TwitterResult<Relationship> {
        let mut params = Params::new();
        source.push_prefixed("source", &mut params);
        target.push_prefixed("target", &mut params);
        let response = self
            .get(&self.rest_url("friendships/show.json"), params)
            .await?;
        factory::relationship(&response)
    }

    /// Connection summaries between the authenticating user and up to 100 users.
    pub async fn lookup_friendships(
        &self,
        users: &[UserRef],
    ) -> TwitterResult<ResponseList<Friendship>> {
        self.ensure_authorized()?;
        let mut params = Params::new();
        UserRef::push_all(users, &mut params);
        let response = self
            .get(&self.rest_url("friendships/lookup.json"), params)
            .await?;
        factory::list(&response)
    }

    /// Users with a pending follow request to the authenticating user.
    pub async fn incoming_friendships(&self, cursor: i64) -> TwitterResult<Ids> {
        self.ensure_authorized()?;
        let response = self
            .get(
                &self.rest_url("friendships/incoming.json"),
                Params::new().with("cursor", cursor),
            )
            .await?;
        factory::ids(&response)
    }

    /// Protected users the authenticating user has requested to follow.
    pub async fn outgoing_friendships(&self, cursor: i64) -> TwitterResult<Ids> {
        self.ensure_authorized()?;
        let response = self
            .get(
                &self.rest_url("friendships/outgoing.json"),
                Params::new().with("cursor", cursor),
            )
            .await?;
        factory::ids(&response)
    }

    /// Toggle device notifications and retweets from a followed user.
    #[instrument(skip(self))]
    pub async fn update_friendship(
        &self,
        user: &UserRef,
        device: bool,
        retweets: bool,
    ) -> TwitterResult<Relationship> {
        self.ensure_authorized()?;
        let params = user
            .to_params()
            .with("device", device)
            .with("retweets", retweets);
        let response = self
            .post(&self.rest_url("friendships/update.json"), params)
            .await?;
        factory::relationship(&response)
    }

    /// Users whose retweets the authenticating user has turned off.
    pub async fn no_retweet_ids(&self) -> TwitterResult<Ids> {
        self.ensure_authorized()?;
        let response = self
            .get(&self.rest_url("friendships/no_retweet_ids.json"), Params::new())
            .await?;
        factory::ids(&response)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Social graph
    // ─────────────────────────────────────────────────────────────────────────

    /// Ids `user` follows (the authenticating user when `None`).
    pub async fn friends_ids(&self, user: Option<&UserRef>, cursor: i64) -> TwitterResult<Ids> {
        let response = self
            .get(&self.rest_url("friends/ids.json"), graph_params(user, cursor))
            .await?;
        factory::ids(&response)
    }

    /// Ids following `user` (the authenticating user when `None`).
    pub async fn followers_ids(&self, user: Option<&UserRef>, cursor: i64) -> TwitterResult<Ids> {
        let response = self
            .get(&self.rest_url("followers/ids.json"), graph_params(user, cursor))
            .await?;
        factory::ids(&response)
    }

    /// Users `user` follows, each with their latest status.
    pub async fn friends_statuses(
        &self,
        user: Option<&UserRef>,
        cursor: i64,
    ) -> TwitterResult<PagableResponseList<User>> {
        let mut params = self.entities(Params::new());
        params.extend(graph_params(user, cursor));
        let response = self
            .get(&self.rest_url("statuses/friends.json"), params)
            .await?;
        factory::pagable_list(&response, "users")
    }

    /// Users following `user`, each with their latest status.
    pub async fn followers_statuses(
        &self,
        user: Option<&UserRef>,
        cursor: i64,
    ) -> TwitterResult<PagableResponseList<User>> {
        let mut params = self.entities(Params::new());
        params.extend(graph_params(user, cursor));
        let response = self
            .get(&self.rest_url("statuses/followers.json"), params)
            .await?;
        factory::pagable_list(&response, "users")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────────────────────

    /// Turn on device notifications for a followed user.
    pub async fn enable_notification(&self, user: &UserRef) -> TwitterResult<User> {
        self.ensure_authorized()?;
        let response = self
            .post(
                &self.rest_url("notifications/follow.json"),
                self.entities(user.to_params()),
            )
            .await?;
        factory::object(&response)
    }

    pub async fn disable_notification(&self, user: &UserRef) -> TwitterResult<User> {
        self.ensure_authorized()?;
        let response = self
            .post(
                &self.rest_url("notifications/leave.json"),
                self.entities(user.to_params()),
            )
            .await?;
        factory::object(&response)
    }
}

fn graph_params(user: Option<&UserRef>, cursor: i64) -> Params {
    let params = user.map_or_else(Params::new, UserRef::to_params);
    params.with("cursor", cursor)
}
