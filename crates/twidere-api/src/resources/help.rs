//! Help, legal and undocumented endpoints.

use crate::TwitterClient;
use crate::error::TwitterResult;
use crate::factory;
use crate::http::Params;
use crate::types::{ApiConfiguration, Language, RelatedResults, ResponseList};

impl TwitterClient {
    /// Connectivity check; `true` when the service answers "ok".
    pub async fn test(&self) -> TwitterResult<bool> {
        let response = self
            .get(&self.rest_url("help/test.json"), Params::new())
            .await?;
        factory::contains(&response, "ok")
    }

    /// Limits such as the t.co URL length and photo sizes.
    pub async fn api_configuration(&self) -> TwitterResult<ApiConfiguration> {
        let response = self
            .get(&self.rest_url("help/configuration.json"), Params::new())
            .await?;
        factory::object(&response)
    }

    pub async fn languages(&self) -> TwitterResult<ResponseList<Language>> {
        let response = self
            .get(&self.rest_url("help/languages.json"), Params::new())
            .await?;
        factory::list(&response)
    }

    pub async fn terms_of_service(&self) -> TwitterResult<String> {
        let response = self
            .get(&self.rest_url("legal/tos.json"), Params::new())
            .await?;
        factory::string_field(&response, "tos")
    }

    pub async fn privacy_policy(&self) -> TwitterResult<String> {
        let response = self
            .get(&self.rest_url("legal/privacy.json"), Params::new())
            .await?;
        factory::string_field(&response, "privacy")
    }

    /// Conversation and reply context around a status.
    pub async fn related_results(&self, status_id: u64) -> TwitterResult<RelatedResults> {
        self.ensure_authorized()?;
        let url = self.rest_url_with("related_results/show/{status_id}.json", status_id);
        let response = self.get(&url, Params::new()).await?;
        factory::related_results(&response)
    }
}
