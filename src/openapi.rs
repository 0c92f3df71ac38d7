use utoipa::OpenApi;

use crate::dtos::{
    Category, Entry, Event, MapConfigs, MapLocationProps, MapPageConfigs, MapPageProps,
    PopularTagsConfigs, PopularTagsRequest, Registration,
};
use crate::endpoints::SlugEntity;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::get_map_page,
        crate::handlers::get_map_page_props,
        crate::handlers::get_entity
    ),
    components(schemas(
        MapPageProps,
        MapLocationProps,
        MapConfigs,
        MapPageConfigs,
        PopularTagsConfigs,
        PopularTagsRequest,
        Event,
        Entry,
        Registration,
        Category,
        SlugEntity
    )),
    tags(
        (name = "maps", description = "Map page and OFDB lookups")
    ),
)]
pub struct ApiDoc;
