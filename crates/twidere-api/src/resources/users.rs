//! User endpoints.

use tracing::instrument;

use crate::TwitterClient;
use crate::error::TwitterResult;
use crate::factory;
use crate::http::Params;
use crate::params::{ProfileImageSize, UserRef};
use crate::types::{Category, ProfileImage, ResponseList, User};

/// Page size for user search.
const USER_SEARCH_PER_PAGE: u32 = 20;

impl TwitterClient {
    #[instrument(skip(self))]
    pub async fn show_user(&self, user: &UserRef) -> TwitterResult<User> {
        let params = self.entities(user.to_params());
        let response = self.get(&self.rest_url("users/show.json"), params).await?;
        factory::object(&response)
    }

    /// Profiles for up to 100 users. Ids and screen names may be mixed.
    pub async fn lookup_users(&self, users: &[UserRef]) -> TwitterResult<ResponseList<User>> {
        self.ensure_authorized()?;
        let mut params = Params::new();
        UserRef::push_all(users, &mut params);
        let response = self
            .get(&self.rest_url("users/lookup.json"), self.entities(params))
            .await?;
        factory::list(&response)
    }

    /// People search, 20 results per page.
    pub async fn search_users(&self, query: &str, page: u32) -> TwitterResult<ResponseList<User>> {
        self.ensure_authorized()?;
        let params = Params::new()
            .with("q", query)
            .with("per_page", USER_SEARCH_PER_PAGE)
            .with("page", page);
        let response = self
            .get(&self.rest_url("users/search.json"), self.entities(params))
            .await?;
        factory::list(&response)
    }

    pub async fn suggested_user_categories(&self) -> TwitterResult<ResponseList<Category>> {
        let response = self
            .get(&self.rest_url("users/suggestions.json"), Params::new())
            .await?;
        factory::list(&response)
    }

    /// Suggested users in a category.
    pub async fn user_suggestions(&self, category_slug: &str) -> TwitterResult<ResponseList<User>> {
        let url = self.rest_url_with("users/suggestions/{category_slug}.json", category_slug);
        let response = self.get(&url, Params::new()).await?;
        factory::list_from_field(&response, "users")
    }

    /// Suggested users in a category, each with their latest status.
    pub async fn member_suggestions(
        &self,
        category_slug: &str,
    ) -> TwitterResult<ResponseList<User>> {
        let url =
            self.rest_url_with("users/suggestions/{category_slug}/members.json", category_slug);
        let response = self.get(&url, Params::new()).await?;
        factory::list(&response)
    }

    /// URL of a user's profile image in the given size.
    pub async fn profile_image(
        &self,
        screen_name: &str,
        size: ProfileImageSize,
    ) -> TwitterResult<ProfileImage> {
        let url = self.rest_url_with("users/profile_image/{screen_name}.json", screen_name);
        let response = self
            .get(&url, Params::new().with("size", size.as_str()))
            .await?;
        factory::profile_image(&response)
    }
}
