use axum::{
    Json,
    extract::{Path, Query, State},
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use tracing::error;

use crate::{
    AppState,
    dtos::MapPageProps,
    endpoints::SlugEntity,
    error::ApiError,
    page::MapPageState,
    validation::path_segments,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarMode {
    #[default]
    Expanded,
    Collapsed,
}

#[derive(Debug, Default, Deserialize)]
pub struct MapPageQuery {
    #[serde(default)]
    pub sidebar: SidebarMode,
}

#[utoipa::path(get, path = "/", tag = "maps")]
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Maps API",
        "endpoints": {
            "/maps/{project}": "Map page of a project",
            "/api/maps/{project}": "Map page props as JSON",
            "/api/entities/{entity}/{id}": "OFDB entry or event details"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "maps")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "maps")]
pub async fn healthz_ready() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    get,
    path = "/maps/{slug}",
    params(
        ("slug" = String, Path, description = "Project followed by optional view segments"),
        ("sidebar" = Option<String>, Query, description = "`collapsed` to start with the sidebar collapsed")
    ),
    responses(
        (status = 200, description = "Map page", content_type = "text/html"),
        (status = 400, description = "Invalid project"),
        (status = 404, description = "Project not found"),
        (status = 502, description = "API request failed")
    ),
    tag = "maps"
)]
pub async fn get_map_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<MapPageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let path = path_segments(&slug);
    let props = state.loader.load(&path).await?;

    let mut page_state = MapPageState::new();
    if query.sidebar == SidebarMode::Collapsed {
        page_state.toggle_sidebar();
    }

    let body = state.renderer.render(&props, &page_state).map_err(|err| {
        error!("Failed to render map page: {err}");
        ApiError::Internal("Failed to render page".into())
    })?;
    Ok(Html(body))
}

#[utoipa::path(
    get,
    path = "/api/maps/{slug}",
    params(
        ("slug" = String, Path, description = "Project followed by optional view segments")
    ),
    responses(
        (status = 200, description = "Map page props", body = MapPageProps),
        (status = 400, description = "Invalid project"),
        (status = 404, description = "Project not found"),
        (status = 502, description = "API request failed")
    ),
    tag = "maps"
)]
pub async fn get_map_page_props(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<MapPageProps>, ApiError> {
    let path = path_segments(&slug);
    let props = state.loader.load(&path).await?;
    Ok(Json(props))
}

#[utoipa::path(
    get,
    path = "/api/entities/{entity}/{id}",
    params(
        ("entity" = SlugEntity, Path, description = "`entry` or `event`"),
        ("id" = String, Path, description = "OFDB id")
    ),
    responses(
        (status = 200, description = "Entry or event details", content_type = "application/json"),
        (status = 404, description = "Entity not found"),
        (status = 502, description = "API request failed")
    ),
    tag = "maps"
)]
pub async fn get_entity(
    State(state): State<AppState>,
    Path((entity, id)): Path<(SlugEntity, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let details = state.client.get_entity(entity, &id).await?;
    Ok(Json(details))
}
