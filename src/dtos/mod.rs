mod entry;
mod event;
mod map_page;
mod tag;

pub use entry::Entry;
pub use event::{
    CompactEvent, CompactEvents, Event, EventID, Events, EventsCollection, Registration,
    collect_events,
};
pub use map_page::{MapConfigs, MapLocationProps, MapPageConfigs, MapPageProps, PopularTagsConfigs};
pub use tag::{Category, PopularTagsRequest, Tag, TagCount, TagsCount};
