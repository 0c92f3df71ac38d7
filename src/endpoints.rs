use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;
use utoipa::ToSchema;

pub const GET_MAP_PAGE_CONFIGS: &str = "get_map_page_configs";
pub const GET_POPULAR_TAGS: &str = "get_popular_tags";
pub const GET_OFDB_ENTRY: &str = "get_ofdb_entry";
pub const GET_OFDB_EVENT: &str = "get_ofdb_event";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndpointError {
    #[error("Unknown endpoint: {0}")]
    Unknown(String),
    #[error("Endpoint {name} expects {expected} parameters, got {given}")]
    Arity {
        name: &'static str,
        expected: usize,
        given: usize,
    },
    #[error("Invalid path parameter: {0:?}")]
    InvalidParam(String),
}

/// A named URL template. Placeholders are written as `{param}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    name: &'static str,
    template: &'static str,
}

impl Endpoint {
    pub const fn new(name: &'static str, template: &'static str) -> Self {
        Self { name, template }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn arity(&self) -> usize {
        self.template.matches('{').count()
    }

    /// Substitutes `params` into the placeholders, in order.
    pub fn url(&self, params: &[&str]) -> Result<String, EndpointError> {
        let expected = self.arity();
        if params.len() != expected {
            return Err(EndpointError::Arity {
                name: self.name,
                expected,
                given: params.len(),
            });
        }

        let mut url = String::with_capacity(self.template.len());
        let mut rest = self.template;
        for param in params {
            if !is_path_safe(param) {
                return Err(EndpointError::InvalidParam(param.to_string()));
            }
            // arity was checked, so every param has a placeholder
            let (Some(open), Some(close)) = (rest.find('{'), rest.find('}')) else {
                break;
            };
            url.push_str(&rest[..open]);
            url.push_str(param);
            rest = &rest[close + 1..];
        }
        url.push_str(rest);
        Ok(url)
    }
}

/// A param must stay a single path segment below the template's prefix.
fn is_path_safe(param: &str) -> bool {
    !matches!(param, "" | "." | "..") && !param.contains(['/', '\\', '?', '#', '%'])
}

/// Flat namespace of endpoints keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointRegistry {
    entries: BTreeMap<&'static str, Endpoint>,
}

impl EndpointRegistry {
    pub fn new(endpoints: impl IntoIterator<Item = Endpoint>) -> Self {
        Self {
            entries: endpoints.into_iter().map(|e| (e.name, e)).collect(),
        }
    }

    /// Merges `sources` into one registry. On a name collision the endpoint
    /// of the later source replaces the earlier one.
    pub fn merged<'a>(sources: impl IntoIterator<Item = &'a EndpointRegistry>) -> Self {
        let mut entries = BTreeMap::new();
        for source in sources {
            for (name, endpoint) in &source.entries {
                entries.insert(*name, *endpoint);
            }
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&Endpoint> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn url(&self, name: &str, params: &[&str]) -> Result<String, EndpointError> {
        self.get(name)
            .ok_or_else(|| EndpointError::Unknown(name.to_string()))?
            .url(params)
    }
}

const OFDB_ENTRY: Endpoint = Endpoint::new(GET_OFDB_ENTRY, "/entries/{ids}");
const OFDB_EVENT: Endpoint = Endpoint::new(GET_OFDB_EVENT, "/events/{id}");

pub static BASICS_ENDPOINTS: Lazy<EndpointRegistry> = Lazy::new(|| {
    EndpointRegistry::new([Endpoint::new(
        GET_MAP_PAGE_CONFIGS,
        "/projects/{project}/configs/map-page",
    )])
});

pub static OFDB_ENDPOINTS: Lazy<EndpointRegistry> = Lazy::new(|| {
    EndpointRegistry::new([
        Endpoint::new(GET_POPULAR_TAGS, "/entries/most-popular-tags"),
        OFDB_ENTRY,
        OFDB_EVENT,
    ])
});

/// Basics and OFDB endpoints; OFDB wins on a name collision.
pub static API_ENDPOINTS: Lazy<EndpointRegistry> =
    Lazy::new(|| EndpointRegistry::merged([&*BASICS_ENDPOINTS, &*OFDB_ENDPOINTS]));

/// Entity kinds addressable through the OFDB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SlugEntity {
    Entry,
    Event,
}

pub fn map_entity_to_ofdb(entity: SlugEntity) -> Endpoint {
    match entity {
        SlugEntity::Entry => OFDB_ENTRY,
        SlugEntity::Event => OFDB_EVENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        let endpoint = Endpoint::new("x", "/projects/{project}/configs/map-page");
        assert_eq!(
            endpoint.url(&["acme"]).unwrap(),
            "/projects/acme/configs/map-page"
        );
        assert_eq!(
            Endpoint::new("y", "/a/{b}/c/{d}").url(&["1", "2"]).unwrap(),
            "/a/1/c/2"
        );
        assert_eq!(
            Endpoint::new("z", "/entries/most-popular-tags").url(&[]).unwrap(),
            "/entries/most-popular-tags"
        );
    }

    #[test]
    fn test_endpoint_url_arity() {
        let endpoint = Endpoint::new("x", "/events/{id}");
        assert_eq!(
            endpoint.url(&[]).unwrap_err(),
            EndpointError::Arity {
                name: "x",
                expected: 1,
                given: 0
            }
        );
        assert!(endpoint.url(&["a", "b"]).is_err());
    }

    #[test]
    fn test_endpoint_url_rejects_unsafe_params() {
        let endpoint = Endpoint::new("x", "/events/{id}");
        assert!(matches!(
            endpoint.url(&["a/b"]),
            Err(EndpointError::InvalidParam(_))
        ));
        assert!(endpoint.url(&[""]).is_err());
        assert!(endpoint.url(&["a?b=1"]).is_err());
    }

    #[test]
    fn test_endpoint_url_rejects_traversal() {
        let endpoint = Endpoint::new("x", "/events/{id}");
        for param in [".", "..", "..\\..\\admin", "a\\b", "%2E%2E", "a%2Fb"] {
            assert_eq!(
                endpoint.url(&[param]).unwrap_err(),
                EndpointError::InvalidParam(param.to_string()),
                "accepted {param:?}"
            );
        }
        assert_eq!(endpoint.url(&["e.1"]).unwrap(), "/events/e.1");
    }

    #[test]
    fn test_api_endpoints_contains_both_registries() {
        for name in BASICS_ENDPOINTS.names().chain(OFDB_ENDPOINTS.names()) {
            assert!(API_ENDPOINTS.contains(name), "missing {name}");
        }
        for name in OFDB_ENDPOINTS.names() {
            assert_eq!(API_ENDPOINTS.get(name), OFDB_ENDPOINTS.get(name));
        }
    }

    #[test]
    fn test_merged_later_source_wins() {
        let basics = EndpointRegistry::new([
            Endpoint::new("shared", "/basics/shared"),
            Endpoint::new("only_basics", "/basics"),
        ]);
        let ofdb = EndpointRegistry::new([
            Endpoint::new("shared", "/ofdb/shared"),
            Endpoint::new("only_ofdb", "/ofdb"),
        ]);
        let merged = EndpointRegistry::merged([&basics, &ofdb]);

        assert_eq!(merged.names().count(), 3);
        assert_eq!(merged.get("shared").unwrap().template(), "/ofdb/shared");
        assert!(merged.contains("only_basics"));
        assert!(merged.contains("only_ofdb"));

        let reversed = EndpointRegistry::merged([&ofdb, &basics]);
        assert_eq!(reversed.get("shared").unwrap().template(), "/basics/shared");
    }

    #[test]
    fn test_map_entity_to_ofdb() {
        assert_eq!(
            Some(&map_entity_to_ofdb(SlugEntity::Entry)),
            OFDB_ENDPOINTS.get(GET_OFDB_ENTRY)
        );
        assert_eq!(
            Some(&map_entity_to_ofdb(SlugEntity::Event)),
            OFDB_ENDPOINTS.get(GET_OFDB_EVENT)
        );
    }

    #[test]
    fn test_unknown_endpoint() {
        assert_eq!(
            API_ENDPOINTS.url("nope", &[]).unwrap_err(),
            EndpointError::Unknown("nope".to_string())
        );
    }
}
