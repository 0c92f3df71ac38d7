use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::tag::{Category, Tag};

pub type EventID = String;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Registration {
    Email,
    Telephone,
    Homepage,
}

/// An OFDB event. Timestamps are unix seconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default)]
pub struct Event {
    #[schema(value_type = String)]
    pub id: EventID,
    pub title: String,
    pub description: String,
    pub start: i64,
    pub end: i64,
    pub created_at: i64,
    pub created_by: String,
    pub lat: f64,
    pub lng: f64,
    pub street: String,
    pub zip: String,
    pub city: String,
    pub country: String,
    pub state: String,
    pub email: String,
    pub telephone: String,
    #[schema(value_type = Vec<String>)]
    pub tags: Vec<Tag>,
    pub homepage: String,
    pub registration: Option<Registration>,
    pub organizer: String,
    pub image_url: String,
    pub image_link_url: String,
}

impl Event {
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.start, 0)
    }

    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.end, 0)
    }
}

/// Reduced projection of [`Event`] used by lists and map markers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompactEvent {
    pub id: EventID,
    pub title: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub categories: [Category; 1],
    pub tags: Vec<Tag>,
}

impl From<&Event> for CompactEvent {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            lat: event.lat,
            lng: event.lng,
            categories: [Category::Event],
            tags: event.tags.clone(),
        }
    }
}

pub type CompactEvents = Vec<CompactEvent>;

pub type Events = Vec<Event>;

/// Events keyed by id.
pub type EventsCollection = HashMap<EventID, Event>;

/// Keys events by id. A later event with an already seen id replaces the earlier one.
pub fn collect_events(events: impl IntoIterator<Item = Event>) -> EventsCollection {
    events
        .into_iter()
        .map(|event| (event.id.clone(), event))
        .collect()
}
