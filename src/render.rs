use crate::dtos::{MapPageProps, TagsCount};
use crate::page::MapPageState;

#[derive(Clone)]
pub struct MapPageRenderer {
    title: String,
    map_widget_src: String,
}

impl MapPageRenderer {
    pub fn new(title: impl Into<String>, map_widget_src: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            map_widget_src: map_widget_src.into(),
        }
    }

    /// Renders the map page document for `props` in the given page state.
    pub fn render(
        &self,
        props: &MapPageProps,
        state: &MapPageState,
    ) -> Result<String, serde_json::Error> {
        let props_json = embed_json(&serde_json::to_string(props)?);
        let router_query = props
            .map_location_props
            .router_query()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        let collapsed = state.is_sidebar_collapsed();
        let sider_class = if collapsed { "sider sider-collapsed" } else { "sider" };
        // collapsed sidebar content is left out, not hidden
        let sidebar = if collapsed {
            String::new()
        } else {
            render_sidebar(&props.popular_tags)
        };
        let spinner = if state.is_loading() {
            r#"<div class="spin" role="status" aria-busy="true"></div>"#
        } else {
            ""
        };

        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<div class="layout has-sider" data-router-query="{router_query}">
<aside class="{sider_class}" data-collapsed="{collapsed}" style="width: 32vw; height: 100vh; display: flex; flex-direction: column; overflow-y: auto">
{sidebar}<button class="sider-trigger" type="button" aria-expanded="{expanded}">&#9776;</button>
</aside>
<main class="content" data-loading="{loading}">
{spinner}<div id="map"></div>
</main>
</div>
<script id="__PAGE_PROPS__" type="application/json">{props_json}</script>
<script src="{src}" defer></script>
</body>
</html>
"#,
            title = escape(&self.title),
            router_query = escape(&router_query),
            expanded = !collapsed,
            loading = state.is_loading(),
            src = escape(&self.map_widget_src),
        );
        Ok(html)
    }
}

fn render_sidebar(tags: &TagsCount) -> String {
    let mut html = String::from("<nav class=\"sidebar\">\n<ul class=\"popular-tags\">\n");
    for tag in tags {
        html.push_str(&format!(
            "<li data-tag=\"{name}\">{name} <span class=\"count\">{count}</span></li>\n",
            name = escape(tag.tag()),
            count = tag.count(),
        ));
    }
    html.push_str("</ul>\n</nav>\n");
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON inside a script element must not close the element.
fn embed_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::{MapLocationProps, TagCount};

    fn props() -> MapPageProps {
        MapPageProps {
            map_location_props: MapLocationProps {
                lat: 48.7,
                lng: 9.1,
                zoom: 12.0,
            },
            popular_tags: vec![
                TagCount("organic".to_string(), 12),
                TagCount("<script>".to_string(), 1),
            ],
        }
    }

    #[test]
    fn test_render_expanded_loading() {
        let renderer = MapPageRenderer::new("Maps", "/static/map-widget.js");
        let html = renderer.render(&props(), &MapPageState::new()).unwrap();
        assert!(html.contains(r#"data-tag="organic""#));
        assert!(html.contains(r#"class="spin""#));
        assert!(html.contains(r#"data-router-query="lat=48.7&amp;lng=9.1&amp;zoom=12""#));
        assert!(html.contains(r#"<script src="/static/map-widget.js" defer>"#));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains(r#""<script>""#));
    }

    #[test]
    fn test_render_collapsed_omits_sidebar() {
        let renderer = MapPageRenderer::new("Maps", "/static/map-widget.js");
        let mut state = MapPageState::new();
        state.toggle_sidebar();
        let html = renderer.render(&props(), &state).unwrap();
        assert!(!html.contains("popular-tags"));
        assert!(html.contains(r#"data-collapsed="true""#));
    }

    #[test]
    fn test_render_ready_has_no_spinner() {
        let renderer = MapPageRenderer::new("Maps", "/static/map-widget.js");
        let mut state = MapPageState::new();
        let ok: Result<(), ()> = Ok(());
        state.on_map_widget_resolved(&ok);
        let html = renderer.render(&props(), &state).unwrap();
        assert!(!html.contains(r#"class="spin""#));
        assert!(html.contains(r#"data-loading="false""#));
    }

    #[test]
    fn test_embedded_props() {
        let renderer = MapPageRenderer::new("Maps", "/m.js");
        let html = renderer.render(&props(), &MapPageState::new()).unwrap();
        assert!(html.contains(r#""mapLocationProps":{"lat":48.7,"lng":9.1,"zoom":12.0}"#));
        assert!(html.contains(r#"["\u003cscript>",1]"#));
    }
}
