use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub api_base_url: Url,
    pub debug: bool,
    pub enable_swagger: bool,
    pub port: u16,
    pub map_widget_src: String,
    pub page_title: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // APP_API_BASE_URL -> api_base_url; nested keys use a double underscore
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("api_base_url", "https://api.ofdb.io/v0")?
            .set_default("debug", false)?
            .set_default("enable_swagger", true)?
            .set_default("port", 8080)?
            .set_default("map_widget_src", "/static/map-widget.js")?
            .set_default("page_title", "Maps")?
            .build()?;

        config.try_deserialize()
    }
}
