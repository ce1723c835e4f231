//! Direct message endpoints.

use tracing::instrument;

use crate::TwitterClient;
use crate::error::TwitterResult;
use crate::factory;
use crate::http::Params;
use crate::params::{Paging, UserRef};
use crate::types::{DirectMessage, ResponseList};

impl TwitterClient {
    /// Messages received by the authenticating user.
    pub async fn direct_messages(&self, paging: Paging) -> TwitterResult<ResponseList<DirectMessage>> {
        self.ensure_authorized()?;
        let response = self
            .get(
                &self.rest_url("direct_messages.json"),
                self.entities(paging.to_params()),
            )
            .await?;
        factory::list(&response)
    }

    /// Messages sent by the authenticating user.
    pub async fn sent_direct_messages(
        &self,
        paging: Paging,
    ) -> TwitterResult<ResponseList<DirectMessage>> {
        self.ensure_authorized()?;
        let response = self
            .get(
                &self.rest_url("direct_messages/sent.json"),
                self.entities(paging.to_params()),
            )
            .await?;
        factory::list(&response)
    }

    pub async fn show_direct_message(&self, id: u64) -> TwitterResult<DirectMessage> {
        self.ensure_authorized()?;
        let url = self.rest_url_with("direct_messages/show/{id}.json", id);
        let response = self.get(&url, self.entities(Params::new())).await?;
        factory::object(&response)
    }

    #[instrument(skip(self, text))]
    pub async fn send_direct_message(
        &self,
        recipient: &UserRef,
        text: &str,
    ) -> TwitterResult<DirectMessage> {
        self.ensure_authorized()?;
        let params = self.entities(recipient.to_params().with("text", text));
        let response = self
            .post(&self.rest_url("direct_messages/new.json"), params)
            .await?;
        factory::object(&response)
    }

    #[instrument(skip(self))]
    pub async fn destroy_direct_message(&self, id: u64) -> TwitterResult<DirectMessage> {
        self.ensure_authorized()?;
        let url = self.rest_url_with("direct_messages/destroy/{id}.json", id);
        let response = self.post(&url, self.entities(Params::new())).await?;
        factory::object(&response)
    }
}
