//! Block and spam report endpoints.

use tracing::{debug, instrument};

use crate::TwitterClient;
use crate::error::TwitterResult;
use crate::factory;
use crate::http::Params;
use crate::params::UserRef;
use crate::types::{Ids, ResponseList, User};

/// Body marker the service returns when the user is not blocked.
const NOT_BLOCKING: &str = "You are not blocking this user.";

impl TwitterClient {
    #[instrument(skip(self))]
    pub async fn create_block(&self, user: &UserRef) -> TwitterResult<User> {
        self.ensure_authorized()?;
        let response = self
            .post(
                &self.rest_url("blocks/create.json"),
                self.entities(user.to_params()),
            )
            .await?;
        factory::object(&response)
    }

    #[instrument(skip(self))]
    pub async fn destroy_block(&self, user: &UserRef) -> TwitterResult<User> {
        self.ensure_authorized()?;
        let response = self
            .post(
                &self.rest_url("blocks/destroy.json"),
                self.entities(user.to_params()),
            )
            .await?;
        factory::object(&response)
    }

    /// Whether the authenticating user blocks `user`. A 404 means no.
    #[instrument(skip(self))]
    pub async fn exists_block(&self, user: &UserRef) -> TwitterResult<bool> {
        self.ensure_authorized()?;
        match self
            .get(&self.rest_url("blocks/exists.json"), user.to_params())
            .await
        {
            Ok(response) => Ok(!factory::contains(&response, NOT_BLOCKING)?),
            Err(e) if e.is_not_found() => {
                debug!("blocks/exists answered 404");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Users the authenticating user blocks, one page at a time.
    pub async fn blocking_users(&self, page: Option<u32>) -> TwitterResult<ResponseList<User>> {
        self.ensure_authorized()?;
        let params = self.entities(Params::new()).with_opt("page", page);
        let response = self
            .get(&self.rest_url("blocks/blocking.json"), params)
            .await?;
        factory::list(&response)
    }

    pub async fn blocking_user_ids(&self) -> TwitterResult<Ids> {
        self.ensure_authorized()?;
        let response = self
            .get(&self.rest_url("blocks/blocking/ids.json"), Params::new())
            .await?;
        factory::ids(&response)
    }

    /// Block `user` and report them for spam.
    #[instrument(skip(self))]
    pub async fn report_spam(&self, user: &UserRef) -> TwitterResult<User> {
        self.ensure_authorized()?;
        let response = self
            .post(
                &self.rest_url("report_spam.json"),
                self.entities(user.to_params()),
            )
            .await?;
        factory::object(&response)
    }
}
