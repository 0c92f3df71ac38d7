use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::tag::Tag;

/// An OFDB place entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default)]
pub struct Entry {
    pub id: String,
    pub version: u64,
    pub title: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub street: String,
    pub zip: String,
    pub city: String,
    pub country: String,
    pub state: String,
    pub email: String,
    pub telephone: String,
    pub homepage: String,
    pub categories: Vec<String>,
    #[schema(value_type = Vec<String>)]
    pub tags: Vec<Tag>,
    pub image_url: String,
    pub image_link_url: String,
}
