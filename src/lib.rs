pub mod client;
pub mod dtos;
pub mod endpoints;
pub mod error;
pub mod handlers;
pub mod loader;
pub mod openapi;
pub mod page;
pub mod render;
pub mod settings;
pub mod validation;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use handlers::{
    get_entity, get_map_page, get_map_page_props, healthz_live, healthz_ready, root,
};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::client::ApiClient;
use crate::loader::MapPageLoader;
use crate::openapi::ApiDoc;
use crate::render::MapPageRenderer;
use crate::settings::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub client: Arc<ApiClient>,
    pub loader: Arc<MapPageLoader>,
    pub renderer: Arc<MapPageRenderer>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let client = Arc::new(ApiClient::new(settings.api_base_url.clone()));
        let renderer = MapPageRenderer::new(
            settings.page_title.clone(),
            settings.map_widget_src.clone(),
        );
        Self {
            loader: Arc::new(MapPageLoader::new(client.clone())),
            renderer: Arc::new(renderer),
            client,
            settings,
        }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let state = AppState::new(settings);
    let app = build_router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
    info!(api = %state.settings.api_base_url, "Starting maps frontend on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    let mut router = Router::new()
        .route("/", get(root))
        .route("/healthz/live", get(healthz_live))
        .route("/healthz/ready", get(healthz_ready))
        .route("/maps/{*slug}", get(get_map_page))
        .route("/api/maps/{*slug}", get(get_map_page_props))
        .route("/api/entities/{entity}/{id}", get(get_entity))
        .with_state(state.clone());

    if state.settings.enable_swagger {
        let openapi = ApiDoc::openapi();
        let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
        router = router.merge(swagger);
    }

    router.layer(trace_layer)
}
