use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::client::{ApiClient, ClientError};
use crate::dtos::{MapPageProps, PopularTagsRequest};
use crate::validation::is_valid_project;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Path must start with a project")]
    EmptyPath,
    #[error("Invalid project: {0:?}")]
    InvalidProject(String),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Returns the project, the first path segment.
pub fn resolve_project<S: AsRef<str>>(path: &[S]) -> Result<&str, LoadError> {
    let project = path.first().ok_or(LoadError::EmptyPath)?.as_ref();
    if !is_valid_project(project) {
        return Err(LoadError::InvalidProject(project.to_string()));
    }
    Ok(project)
}

/// Fetches the data the map page is rendered from.
#[derive(Clone)]
pub struct MapPageLoader {
    client: Arc<ApiClient>,
}

impl MapPageLoader {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Loads the page configs of the project and then the popular tags they ask for.
    /// Either both requests succeed or the load fails.
    #[tracing::instrument(skip(self, path), fields(project = tracing::field::Empty))]
    pub async fn load<S: AsRef<str>>(&self, path: &[S]) -> Result<MapPageProps, LoadError> {
        let project = resolve_project(path)?;
        tracing::Span::current().record("project", project);

        let page_configs = self.client.get_map_page_configs(project).await?;
        let map_location_props = page_configs.map.location;

        let request = PopularTagsRequest::from(&page_configs.popular_tags);
        let popular_tags = self.client.get_popular_tags(&request).await?;
        info!(tags = popular_tags.len(), "loaded map page");

        Ok(MapPageProps {
            map_location_props,
            popular_tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_project_first_segment() {
        let path = ["acme", "view", "42"];
        assert_eq!(resolve_project(&path).unwrap(), "acme");
    }

    #[test]
    fn test_resolve_project_empty_path() {
        let path: [&str; 0] = [];
        assert!(matches!(resolve_project(&path), Err(LoadError::EmptyPath)));
    }

    #[test]
    fn test_resolve_project_invalid() {
        let path = vec!["a b".to_string()];
        assert!(matches!(
            resolve_project(&path),
            Err(LoadError::InvalidProject(p)) if p == "a b"
        ));
    }
}
