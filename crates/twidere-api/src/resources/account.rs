//! Account endpoints. `verify_credentials` lives on the client itself since
//! it fills the identity cache.

use tracing::instrument;

use crate::TwitterClient;
use crate::error::TwitterResult;
use crate::factory;
use crate::http::Params;
use crate::params::{AccountSettingsUpdate, ImageUpload, ProfileColors, ProfileUpdate};
use crate::types::{AccountSettings, AccountTotals, RateLimitStatus, User};

impl TwitterClient {
    /// Remaining API calls in the current window. Unauthenticated callers get
    /// the per-IP figures.
    pub async fn rate_limit_status(&self) -> TwitterResult<RateLimitStatus> {
        let response = self
            .get(&self.rest_url("account/rate_limit_status.json"), Params::new())
            .await?;
        factory::object(&response)
    }

    pub async fn account_settings(&self) -> TwitterResult<AccountSettings> {
        self.ensure_authorized()?;
        let response = self
            .get(&self.rest_url("account/settings.json"), Params::new())
            .await?;
        factory::object(&response)
    }

    #[instrument(skip(self))]
    pub async fn update_account_settings(
        &self,
        update: &AccountSettingsUpdate,
    ) -> TwitterResult<AccountSettings> {
        self.ensure_authorized()?;
        let response = self
            .post(
                &self.rest_url("account/settings.json"),
                self.entities(update.to_params()),
            )
            .await?;
        factory::object(&response)
    }

    pub async fn account_totals(&self) -> TwitterResult<AccountTotals> {
        self.ensure_authorized()?;
        let response = self
            .get(&self.rest_url("account/totals.json"), Params::new())
            .await?;
        factory::object(&response)
    }

    #[instrument(skip(self))]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> TwitterResult<User> {
        self.ensure_authorized()?;
        let response = self
            .post(
                &self.rest_url("account/update_profile.json"),
                self.entities(update.to_params()),
            )
            .await?;
        factory::object(&response)
    }

    #[instrument(skip(self))]
    pub async fn update_profile_colors(&self, colors: &ProfileColors) -> TwitterResult<User> {
        self.ensure_authorized()?;
        let response = self
            .post(
                &self.rest_url("account/update_profile_colors.json"),
                self.entities(colors.to_params()),
            )
            .await?;
        factory::object(&response)
    }

    /// Replace the profile image. Sent as multipart with the image under `image`.
    #[instrument(skip(self, image), fields(file = %image.file_name))]
    pub async fn update_profile_image(&self, image: ImageUpload) -> TwitterResult<User> {
        self.ensure_authorized()?;
        let params = self.entities(Params::new()).with_file("image", image);
        let response = self
            .post(&self.rest_url("account/update_profile_image.json"), params)
            .await?;
        factory::object(&response)
    }

    /// Replace the profile background. `tile` repeats the image instead of
    /// centring it.
    #[instrument(skip(self, image), fields(file = %image.file_name))]
    pub async fn update_profile_background_image(
        &self,
        image: ImageUpload,
        tile: bool,
    ) -> TwitterResult<User> {
        self.ensure_authorized()?;
        let params = self
            .entities(Params::new().with("tile", tile))
            .with_file("image", image);
        let response = self
            .post(
                &self.rest_url("account/update_profile_background_image.json"),
                params,
            )
            .await?;
        factory::object(&response)
    }
}
