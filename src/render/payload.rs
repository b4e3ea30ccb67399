//! Builder payload assembly.
//!
//! The payload is the validated configuration record in the shape the
//! external builder consumes: camelCase keys, resolved nav links, and the
//! copyright year expanded. It is assembled once per build and never
//! mutated afterwards.

use serde::Serialize;

use crate::config::{ConfigError, NavLink, OnPageNav, SiteConfig};

/// The configuration record handed to the external builder.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPayload {
    pub title: String,
    pub tagline: String,
    pub url: String,
    pub base_url: String,
    pub project_name: String,
    pub organization_name: String,
    /// Rendered verbatim in input order.
    pub header_links: Vec<NavLink>,
    /// Absolute URL or empty when "edit this page" links are disabled.
    pub edit_url: String,
    pub copyright: String,
    pub on_page_nav: OnPageNav,
    pub clean_url: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algolia: Option<AlgoliaPayload>,
}

/// Search credentials in the builder's naming.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgoliaPayload {
    pub api_key: String,
    pub index_name: String,
}

impl RenderPayload {
    /// Assemble the payload from a validated configuration.
    ///
    /// The year is injected explicitly so the assembly is a pure function
    /// of its inputs.
    pub fn from_config(config: &SiteConfig, year: u16) -> Result<Self, ConfigError> {
        let site = &config.site;

        let header_links = site
            .header_links
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .resolve()
                    .map_err(|reason| ConfigError::InvalidNavLink { index, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let algolia = config
            .algolia
            .as_ref()
            .filter(|a| a.is_enabled())
            .map(|a| AlgoliaPayload {
                api_key: a.api_key.clone(),
                index_name: a.index_name.clone(),
            });

        Ok(Self {
            title: site.title.clone(),
            tagline: site.tagline.clone(),
            url: site.url.clone(),
            base_url: site.base_url.clone(),
            project_name: site.project_name.clone(),
            organization_name: site.organization_name.clone(),
            header_links,
            edit_url: site.edit_url.clone().unwrap_or_default(),
            copyright: site.expand_copyright(year),
            on_page_nav: site.on_page_nav,
            clean_url: site.clean_url,
            algolia,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_payload_uses_builder_key_shape() {
        let config = test_parse_config(
            "tagline = \"Type-safe JS promises for ReasonML\"\n\
             copyright = \"Copyright © {year} Anton Bachin\"",
        );
        let payload = RenderPayload::from_config(&config, 2026).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&payload).unwrap()).unwrap();

        assert_eq!(json["title"], "Repromise");
        assert_eq!(json["baseUrl"], "/repromise/");
        assert_eq!(json["projectName"], "repromise");
        assert_eq!(json["organizationName"], "aantron");
        assert_eq!(json["onPageNav"], "separate");
        assert_eq!(json["cleanUrl"], true);
        assert_eq!(json["copyright"], "Copyright © 2026 Anton Bachin");
        // disabled search: the key is omitted entirely
        assert!(json.get("algolia").is_none());
    }

    #[test]
    fn test_payload_preserves_nav_order() {
        let config = test_parse_config(
            r#"[[site.header_links]]
doc = "QuickStart"
label = "Docs"

[[site.header_links]]
doc = "API"
label = "API"

[[site.header_links]]
href = "https://github.com/aantron/repromise"
label = "GitHub"

[[site.header_links]]
search = true
"#,
        );
        let payload = RenderPayload::from_config(&config, 2026).unwrap();

        assert_eq!(payload.header_links.len(), 4);
        assert_eq!(payload.header_links[0].label(), Some("Docs"));
        assert_eq!(payload.header_links[1].label(), Some("API"));
        assert_eq!(payload.header_links[2].label(), Some("GitHub"));
        assert_eq!(payload.header_links[3], NavLink::search_slot());

        let json = serde_json::to_string(&payload).unwrap();
        let docs = json.find("\"Docs\"").unwrap();
        let api = json.find("\"API\"").unwrap();
        let github = json.find("\"GitHub\"").unwrap();
        assert!(docs < api && api < github);
    }

    #[test]
    fn test_payload_includes_enabled_algolia() {
        let config =
            test_parse_config("[algolia]\napi_key = \"x\"\nindex_name = \"repromise\"");
        let payload = RenderPayload::from_config(&config, 2026).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&payload).unwrap()).unwrap();
        assert_eq!(json["algolia"]["apiKey"], "x");
        assert_eq!(json["algolia"]["indexName"], "repromise");
    }

    #[test]
    fn test_payload_rejects_broken_nav_entry() {
        let config = test_parse_config("[[site.header_links]]\nlabel = \"Dangling\"");
        let err = RenderPayload::from_config(&config, 2026).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNavLink { index: 0, .. }));
    }

    #[test]
    fn test_payload_empty_edit_url() {
        let config = test_parse_config("");
        let payload = RenderPayload::from_config(&config, 2026).unwrap();
        assert_eq!(payload.edit_url, "");
    }
}
