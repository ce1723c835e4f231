//! Search API and saved searches.

use tracing::instrument;

use crate::TwitterClient;
use crate::error::TwitterResult;
use crate::factory;
use crate::http::Params;
use crate::params::Query;
use crate::types::{QueryResult, ResponseList, SavedSearch};

impl TwitterClient {
    /// Run a query against the search API host.
    #[instrument(skip(self), fields(q = %query.query))]
    pub async fn search(&self, query: &Query) -> TwitterResult<QueryResult> {
        let params = self.entities(query.to_params());
        let response = self.get(&self.search_url("search.json"), params).await?;
        factory::query_result(&response)
    }

    pub async fn saved_searches(&self) -> TwitterResult<ResponseList<SavedSearch>> {
        self.ensure_authorized()?;
        let response = self
            .get(&self.rest_url("saved_searches.json"), Params::new())
            .await?;
        factory::list(&response)
    }

    pub async fn show_saved_search(&self, id: u64) -> TwitterResult<SavedSearch> {
        self.ensure_authorized()?;
        let url = self.rest_url_with("saved_searches/show/{id}.json", id);
        let response = self.get(&url, Params::new()).await?;
        factory::object(&response)
    }

    pub async fn create_saved_search(&self, query: &str) -> TwitterResult<SavedSearch> {
        self.ensure_authorized()?;
        let response = self
            .post(
                &self.rest_url("saved_searches/create.json"),
                Params::new().with("query", query),
            )
            .await?;
        factory::object(&response)
    }

    pub async fn destroy_saved_search(&self, id: u64) -> TwitterResult<SavedSearch> {
        self.ensure_authorized()?;
        let url = self.rest_url_with("saved_searches/destroy/{id}.json", id);
        let response = self.post(&url, Params::new()).await?;
        factory::object(&response)
    }
}
