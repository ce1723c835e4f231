//! List, list member and list subscriber endpoints.

use tracing::instrument;

use crate::TwitterClient;
use crate::error::TwitterResult;
use crate::factory;
use crate::http::Params;
use crate::params::{ListUpdate, Paging, UserRef};
use crate::types::{PagableResponseList, ResponseList, Status, User, UserList};

impl TwitterClient {
    // ─────────────────────────────────────────────────────────────────────────
    // Lists
    // ─────────────────────────────────────────────────────────────────────────

    #[instrument(skip(self, description))]
    pub async fn create_user_list(
        &self,
        name: &str,
        public: bool,
        description: Option<&str>,
    ) -> TwitterResult<UserList> {
        self.ensure_authorized()?;
        let mut params = Params::new();
        ListUpdate {
            name: Some(name.to_string()),
            public,
            description: description.map(str::to_string),
        }
        .push_into(&mut params);
        let response = self.post(&self.rest_url("lists/create.json"), params).await?;
        factory::object(&response)
    }

    pub async fn update_user_list(
        &self,
        list_id: u64,
        update: &ListUpdate,
    ) -> TwitterResult<UserList> {
        self.ensure_authorized()?;
        let mut params = Params::new().with("list_id", list_id);
        update.push_into(&mut params);
        let response = self.post(&self.rest_url("lists/update.json"), params).await?;
        factory::object(&response)
    }

    pub async fn destroy_user_list(&self, list_id: u64) -> TwitterResult<UserList> {
        self.ensure_authorized()?;
        let response = self
            .post(
                &self.rest_url("lists/destroy.json"),
                Params::new().with("list_id", list_id),
            )
            .await?;
        factory::object(&response)
    }

    pub async fn show_user_list(&self, list_id: u64) -> TwitterResult<UserList> {
        let response = self
            .get(
                &self.rest_url("lists/show.json"),
                Params::new().with("list_id", list_id),
            )
            .await?;
        factory::object(&response)
    }

    /// Lists owned by `owner`.
    pub async fn user_lists(
        &self,
        owner: &UserRef,
        cursor: i64,
    ) -> TwitterResult<PagableResponseList<UserList>> {
        let params = owner.to_params().with("cursor", cursor);
        let response = self.get(&self.rest_url("lists.json"), params).await?;
        factory::pagable_list(&response, "lists")
    }

    /// Every list `user` owns or subscribes to, unpaged.
    pub async fn all_user_lists(&self, user: &UserRef) -> TwitterResult<ResponseList<UserList>> {
        let response = self
            .get(&self.rest_url("lists/all.json"), user.to_params())
            .await?;
        factory::list(&response)
    }

    /// Statuses from a list's members. The page size is sent as `per_page`.
    pub async fn user_list_statuses(
        &self,
        list_id: u64,
        paging: Paging,
    ) -> TwitterResult<ResponseList<Status>> {
        let mut params = Params::new();
        paging.push_per_page(&mut params);
        params = self.rts(self.entities(params.with("list_id", list_id)));
        let response = self
            .get(&self.rest_url("lists/statuses.json"), params)
            .await?;
        factory::list(&response)
    }

    /// Lists `member` has been added to, or the authenticating user's when
    /// `None`. `filter_to_owned_lists` restricts to lists the authenticating
    /// user owns.
    pub async fn user_list_memberships(
        &self,
        member: Option<&UserRef>,
        cursor: i64,
        filter_to_owned_lists: bool,
    ) -> TwitterResult<PagableResponseList<UserList>> {
        let params = match member {
            Some(member) => {
                if filter_to_owned_lists {
                    self.ensure_authorized()?;
                }
                member
                    .to_params()
                    .with("cursor", cursor)
                    .with("filter_to_owned_lists", filter_to_owned_lists)
            }
            None => {
                self.ensure_authorized()?;
                Params::new().with("cursor", cursor)
            }
        };
        let response = self
            .get(&self.rest_url("lists/memberships.json"), params)
            .await?;
        factory::pagable_list(&response, "lists")
    }

    /// Lists `user` subscribes to.
    pub async fn user_list_subscriptions(
        &self,
        user: &UserRef,
        cursor: i64,
    ) -> TwitterResult<PagableResponseList<UserList>> {
        let params = user.to_params().with("cursor", cursor);
        let response = self
            .get(&self.rest_url("lists/subscriptions.json"), params)
            .await?;
        factory::pagable_list(&response, "lists")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Members
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn user_list_members(
        &self,
        list_id: u64,
        cursor: i64,
    ) -> TwitterResult<PagableResponseList<User>> {
        let params = self
            .entities(Params::new().with("list_id", list_id))
            .with("cursor", cursor);
        let response = self
            .get(&self.rest_url("lists/members.json"), params)
            .await?;
        factory::pagable_list(&response, "users")
    }

    pub async fn add_user_list_member(
        &self,
        list_id: u64,
        user: &UserRef,
    ) -> TwitterResult<UserList> {
        self.ensure_authorized()?;
        let params = user.to_params().with("list_id", list_id);
        let response = self
            .post(&self.rest_url("lists/members/create.json"), params)
            .await?;
        factory::object(&response)
    }

    /// Add up to 100 members at once.
    pub async fn add_user_list_members(
        &self,
        list_id: u64,
        users: &[UserRef],
    ) -> TwitterResult<UserList> {
        self.ensure_authorized()?;
        let mut params = Params::new().with("list_id", list_id);
        UserRef::push_all(users, &mut params);
        let response = self
            .post(&self.rest_url("lists/members/create_all.json"), params)
            .await?;
        factory::object(&response)
    }

    pub async fn delete_user_list_member(
        &self,
        list_id: u64,
        user: &UserRef,
    ) -> TwitterResult<UserList> {
        self.ensure_authorized()?;
        let params = user.to_params().with("list_id", list_id);
        let response = self
            .post(&self.rest_url("lists/members/destroy.json"), params)
            .await?;
        factory::object(&response)
    }

    /// The member if `user` is on the list; a 404 error otherwise.
    pub async fn show_user_list_membership(
        &self,
        list_id: u64,
        user: &UserRef,
    ) -> TwitterResult<User> {
        self.ensure_authorized()?;
        let mut params = Params::new().with("list_id", list_id);
        user.push_into(&mut params);
        let response = self
            .get(&self.rest_url("lists/members/show.json"), self.entities(params))
            .await?;
        factory::object(&response)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Subscribers
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn user_list_subscribers(
        &self,
        list_id: u64,
        cursor: i64,
    ) -> TwitterResult<PagableResponseList<User>> {
        let params = self
            .entities(Params::new().with("list_id", list_id))
            .with("cursor", cursor);
        let response = self
            .get(&self.rest_url("lists/subscribers.json"), params)
            .await?;
        factory::pagable_list(&response, "users")
    }

    /// Subscribe the authenticating user to a list.
    pub async fn create_user_list_subscription(&self, list_id: u64) -> TwitterResult<UserList> {
        self.ensure_authorized()?;
        let response = self
            .post(
                &self.rest_url("lists/subscribers/create.json"),
                Params::new().with("list_id", list_id),
            )
            .await?;
        factory::object(&response)
    }

    /// Unsubscribe the authenticating user from a list.
    pub async fn destroy_user_list_subscription(&self, list_id: u64) -> TwitterResult<UserList> {
        self.ensure_authorized()?;
        let response = self
            .post(
                &self.rest_url("lists/subscribers/destroy.json"),
                Params::new().with("list_id", list_id),
            )
            .await?;
        factory::object(&response)
    }

    /// The subscriber if `user` follows the list; a 404 error otherwise.
    pub async fn show_user_list_subscription(
        &self,
        list_id: u64,
        user: &UserRef,
    ) -> TwitterResult<User> {
        self.ensure_authorized()?;
        let mut params = Params::new().with("list_id", list_id);
        user.push_into(&mut params);
        let response = self
            .get(
                &self.rest_url("lists/subscribers/show.json"),
                self.entities(params),
            )
            .await?;
        factory::object(&response)
    }
}
