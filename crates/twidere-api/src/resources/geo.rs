//! Geo endpoints.

use tracing::{debug, instrument};

use crate::TwitterClient;
use crate::error::TwitterResult;
use crate::factory;
use crate::http::Params;
use crate::params::GeoQuery;
use crate::types::{GeoLocation, Place, ResponseList, SimilarPlaces};

const STREET_ADDRESS: &str = "attribute:street_address";

impl TwitterClient {
    #[instrument(skip(self))]
    pub async fn search_places(&self, query: &GeoQuery) -> TwitterResult<ResponseList<Place>> {
        let response = self
            .get(&self.rest_url("geo/search.json"), query.to_params())
            .await?;
        factory::places(&response)
    }

    /// Places resembling a new one, plus the token `create_place` needs.
    pub async fn similar_places(
        &self,
        location: GeoLocation,
        name: &str,
        contained_within: Option<&str>,
        street_address: Option<&str>,
    ) -> TwitterResult<SimilarPlaces> {
        let params = Params::new()
            .with("lat", location.latitude)
            .with("long", location.longitude)
            .with("name", name)
            .with_opt("contained_within", contained_within)
            .with_opt(STREET_ADDRESS, street_address);
        let response = self
            .get(&self.rest_url("geo/similar_places.json"), params)
            .await?;
        factory::similar_places(&response)
    }

    /// Places near a point. An unknown location answers 404, surfaced as an
    /// empty list.
    #[instrument(skip(self))]
    pub async fn reverse_geocode(&self, query: &GeoQuery) -> TwitterResult<ResponseList<Place>> {
        match self
            .get(&self.rest_url("geo/reverse_geocode.json"), query.to_params())
            .await
        {
            Ok(response) => factory::places(&response),
            Err(e) if e.is_not_found() => {
                debug!("reverse_geocode answered 404");
                Ok(factory::empty_list())
            }
            Err(e) => Err(e),
        }
    }

    pub async fn geo_details(&self, place_id: &str) -> TwitterResult<Place> {
        let url = self.rest_url_with("geo/id/{place_id}.json", place_id);
        let response = self.get(&url, Params::new()).await?;
        factory::object(&response)
    }

    /// Create a place. `token` comes from a preceding `similar_places` call.
    #[instrument(skip(self, token))]
    pub async fn create_place(
        &self,
        name: &str,
        contained_within: &str,
        token: &str,
        location: GeoLocation,
        street_address: Option<&str>,
    ) -> TwitterResult<Place> {
        self.ensure_authorized()?;
        let params = Params::new()
            .with("name", name)
            .with("contained_within", contained_within)
            .with("token", token)
            .with("lat", location.latitude)
            .with("long", location.longitude)
            .with_opt(STREET_ADDRESS, street_address);
        let response = self.post(&self.rest_url("geo/place.json"), params).await?;
        factory::object(&response)
    }
}
