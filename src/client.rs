use std::sync::Arc;

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::dtos::{Entry, Event, MapPageConfigs, PopularTagsRequest, TagsCount};
use crate::endpoints::{
    API_ENDPOINTS, EndpointError, GET_MAP_PAGE_CONFIGS, GET_POPULAR_TAGS, SlugEntity,
    map_entity_to_ofdb,
};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API responded with {status} for {url}")]
    Status { status: StatusCode, url: String },
    #[error("Entity {0} not found")]
    NotFound(String),
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Entity details as returned by the OFDB.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum EntityDetails {
    Entry(Entry),
    Event(Event),
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Arc<Url>,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Arc::new(base_url),
        }
    }

    /// Appends the segments of an endpoint path to the base URL, keeping the
    /// base path. Each segment is percent-encoded on its own.
    fn resolve(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ClientError> {
        let mut url = Url::clone(&self.base_url);
        url.path_segments_mut()
            .map_err(|_| ClientError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// GETs `path` and unwraps the JSON payload of a successful response.
    pub async fn get_request<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self.resolve(path, query)?;
        debug!(url = %url, "GET");

        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }

    pub async fn get_map_page_configs(&self, project: &str) -> Result<MapPageConfigs, ClientError> {
        let path = API_ENDPOINTS.url(GET_MAP_PAGE_CONFIGS, &[project])?;
        self.get_request(&path, &[]).await
    }

    pub async fn get_popular_tags(
        &self,
        request: &PopularTagsRequest,
    ) -> Result<TagsCount, ClientError> {
        let path = API_ENDPOINTS.url(GET_POPULAR_TAGS, &[])?;
        self.get_request(&path, &request.query_pairs()).await
    }

    pub async fn get_entity(
        &self,
        entity: SlugEntity,
        id: &str,
    ) -> Result<EntityDetails, ClientError> {
        let path = map_entity_to_ofdb(entity).url(&[id])?;
        match entity {
            SlugEntity::Entry => {
                // the entries endpoint takes a comma separated id list
                let entries: Vec<Entry> = self.get_request(&path, &[]).await?;
                entries
                    .into_iter()
                    .next()
                    .map(EntityDetails::Entry)
                    .ok_or_else(|| ClientError::NotFound(id.to_string()))
            }
            SlugEntity::Event => {
                let event: Event = self.get_request(&path, &[]).await?;
                Ok(EntityDetails::Event(event))
            }
        }
    }
}
