use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::tag::{PopularTagsRequest, TagsCount};

/// Initial map viewport.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct MapLocationProps {
    pub lat: f64,
    pub lng: f64,
    pub zoom: f64,
}

impl MapLocationProps {
    /// Query the client router starts from.
    pub fn router_query(&self) -> [(&'static str, String); 3] {
        [
            ("lat", self.lat.to_string()),
            ("lng", self.lng.to_string()),
            ("zoom", self.zoom.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct MapConfigs {
    pub location: MapLocationProps,
}

/// Project defaults for the popular tags query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct PopularTagsConfigs {
    pub min_count: u32,
    pub max_count: u32,
    pub limit: u32,
    pub offset: u32,
}

impl From<&PopularTagsConfigs> for PopularTagsRequest {
    fn from(configs: &PopularTagsConfigs) -> Self {
        Self {
            min_count: configs.min_count,
            max_count: configs.max_count,
            limit: configs.limit,
            offset: configs.offset,
        }
    }
}

/// Per-project configuration of the map page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MapPageConfigs {
    pub map: MapConfigs,
    pub popular_tags: PopularTagsConfigs,
}

/// Props the map page is rendered from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MapPageProps {
    pub map_location_props: MapLocationProps,
    #[schema(value_type = Vec<Object>)]
    pub popular_tags: TagsCount,
}
