//! `[site]` section configuration.
//!
//! Contains the site identity handed to the external builder: title,
//! canonical URLs, project identifiers, and the header navigation.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::section::nav::{self, NavEntry};
use crate::config::types::{ConfigDiagnostics, ConfigError};
use crate::config::util::{extract_url_path, validate_absolute_url};

/// Site identity and navigation.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Display name of the site.
    #[config(inline_doc)]
    pub title: String,

    /// Short descriptive subtitle.
    #[config(inline_doc)]
    pub tagline: String,

    /// Absolute base URL of the deployed site (e.g., "https://example.github.io/my-project").
    #[config(inline_doc)]
    pub url: String,

    /// Root-relative path the site is served under, with leading and trailing slash.
    #[config(default = "/", inline_doc)]
    pub base_url: String,

    /// Project identifier used to build canonical links.
    #[config(inline_doc)]
    pub project_name: String,

    /// Owning user or organization identifier.
    #[config(inline_doc)]
    pub organization_name: String,

    /// Base URL for "edit this page" links.
    pub edit_url: Option<String>,

    /// Footer copyright line; `{year}` expands to the build year.
    #[config(default = "Copyright © {year}", inline_doc)]
    pub copyright: String,

    /// Page-level table of contents placement.
    #[config(default = "separate", inline_doc)]
    pub on_page_nav: OnPageNav,

    /// Emit links without trailing ".html".
    pub clean_url: bool,

    /// Ordered header navigation entries, rendered left to right.
    #[config(hidden)]
    pub header_links: Vec<NavEntry>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            url: String::new(),
            base_url: String::new(),
            project_name: String::new(),
            organization_name: String::new(),
            edit_url: None,
            copyright: String::new(),
            on_page_nav: OnPageNav::Separate,
            clean_url: true,
            header_links: Vec::new(),
        }
    }
}

impl SiteSectionConfig {
    /// Validate the site section.
    ///
    /// # Checks
    /// - `title`, `url`, `base_url`, `project_name`, `organization_name`
    ///   must be non-empty
    /// - `url` and `edit_url` must be valid absolute http(s) URLs
    /// - `base_url` must start and end with `/`
    /// - every `header_links` entry must resolve to exactly one case
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.validate_required(diag);

        if !self.url.is_empty() {
            validate_absolute_url(&self.url, Self::FIELDS.url, diag);
        }

        if !self.base_url.is_empty() {
            self.validate_base_url(diag);
        }

        if let Some(edit_url) = &self.edit_url
            && !edit_url.is_empty()
        {
            validate_absolute_url(edit_url, Self::FIELDS.edit_url, diag);
        }

        nav::validate_header_links(&self.header_links, Self::FIELDS.header_links, diag);
    }

    fn validate_required(&self, diag: &mut ConfigDiagnostics) {
        let required = [
            (&self.title, Self::FIELDS.title),
            (&self.url, Self::FIELDS.url),
            (&self.base_url, Self::FIELDS.base_url),
            (&self.project_name, Self::FIELDS.project_name),
            (&self.organization_name, Self::FIELDS.organization_name),
        ];

        for (value, field) in required {
            if value.trim().is_empty() {
                diag.error(ConfigError::MissingField(field));
            }
        }
    }

    fn validate_base_url(&self, diag: &mut ConfigDiagnostics) {
        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            diag.error_with_hint(
                ConfigError::InvalidBaseUrl {
                    value: self.base_url.clone(),
                },
                "use a root-relative path like \"/repromise/\"",
            );
            return;
        }

        // Non-fatal: flag a base_url that disagrees with the path of `url`,
        // a common copy-paste slip on project-page deployments.
        if let Some(path) = extract_url_path(&self.url)
            && !path.is_empty()
            && self.base_url.trim_matches('/') != path
        {
            diag.hint(
                Self::FIELDS.base_url,
                format!(
                    "`{}` does not match the path of {} (expected \"/{}/\")",
                    self.base_url,
                    Self::FIELDS.url,
                    path
                ),
            );
        }
    }

    /// Expand the `{year}` placeholder in the copyright line.
    ///
    /// The year is an explicit parameter so resolution stays a pure
    /// function of its inputs.
    pub fn expand_copyright(&self, year: u16) -> String {
        self.copyright.replace("{year}", &year.to_string())
    }
}

/// Page-level table of contents placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnPageNav {
    /// Render the on-page navigation in a separate sidebar column.
    #[default]
    Separate,

    /// No on-page navigation.
    None,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.tagline, "");
        assert!(config.site.edit_url.is_none());
        assert_eq!(config.site.on_page_nav, OnPageNav::Separate);
        assert!(config.site.clean_url);
        assert!(config.site.header_links.is_empty());
    }

    #[test]
    fn test_valid_config_passes() {
        let config = test_parse_config("");
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.is_empty(), "unexpected errors: {:?}", diag.errors());
    }

    #[test]
    fn test_missing_required_fields() {
        let site = SiteSectionConfig::default();
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);

        // title, url, base_url, project_name, organization_name
        assert_eq!(diag.len(), 5);
        assert!(diag.errors().iter().all(|d| matches!(
            d.error,
            ConfigError::MissingField(_)
        )));
    }

    #[test]
    fn test_invalid_url() {
        let mut site = test_parse_config("").site;
        site.url = "not-a-url".into();

        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.errors().iter().any(|d| matches!(
            d.error,
            ConfigError::InvalidUrl { field, .. } if field.as_str() == "site.url"
        )));
    }

    #[test]
    fn test_valid_project_page_url() {
        let mut site = test_parse_config("").site;
        site.url = "https://aantron.github.io/repromise".into();
        site.base_url = "/repromise/".into();

        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_base_url_without_slashes() {
        let mut site = test_parse_config("").site;
        site.base_url = "repromise".into();

        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.errors().iter().any(|d| matches!(
            d.error,
            ConfigError::InvalidBaseUrl { ref value } if value == "repromise"
        )));
    }

    #[test]
    fn test_base_url_missing_trailing_slash() {
        let mut site = test_parse_config("").site;
        site.base_url = "/repromise".into();

        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_root_base_url_is_valid() {
        let mut site = test_parse_config("").site;
        site.url = "https://repromise.dev".into();
        site.base_url = "/".into();

        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_invalid_edit_url() {
        let mut site = test_parse_config("").site;
        site.edit_url = Some("ftp://example.com/docs".into());

        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.errors().iter().any(|d| matches!(
            d.error,
            ConfigError::InvalidUrl { field, .. } if field.as_str() == "site.edit_url"
        )));
    }

    #[test]
    fn test_expand_copyright() {
        let mut site = SiteSectionConfig::default();
        site.copyright = "Copyright © {year} Anton Bachin".into();
        assert_eq!(
            site.expand_copyright(2026),
            "Copyright © 2026 Anton Bachin"
        );
    }

    #[test]
    fn test_expand_copyright_without_placeholder() {
        let mut site = SiteSectionConfig::default();
        site.copyright = "All rights reserved".into();
        assert_eq!(site.expand_copyright(2026), "All rights reserved");
    }

    #[test]
    fn test_on_page_nav_parses() {
        let config = test_parse_config("on_page_nav = \"none\"");
        assert_eq!(config.site.on_page_nav, OnPageNav::None);
    }

    #[test]
    fn test_header_links_preserve_order() {
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
"#,
        );

        let labels: Vec<_> = config
            .site
            .header_links
            .iter()
            .map(|e| e.resolve().unwrap().label().unwrap().to_string())
            .collect();
        assert_eq!(labels, ["Docs", "API", "GitHub"]);
    }
}
