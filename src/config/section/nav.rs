//! `[[site.header_links]]` navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[site.header_links]]
//! doc = "QuickStart"
//! label = "Docs"
//!
//! [[site.header_links]]
//! href = "https://github.com/aantron/repromise"
//! label = "GitHub"
//!
//! [[site.header_links]]
//! search = true
//! ```

use serde::{Deserialize, Serialize};

use crate::config::types::{ConfigDiagnostics, ConfigError, FieldPath};
use crate::config::util::validate_absolute_url;

/// One header navigation entry as written in the config file.
///
/// Each entry must populate exactly one case: `doc`, `href`, or `search`.
/// Unknown keys are rejected at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavEntry {
    /// Internal documentation page id.
    pub doc: Option<String>,
    /// External link target.
    pub href: Option<String>,
    /// Marks the slot where the search box is rendered.
    pub search: bool,
    /// Menu text for `doc` and `href` entries.
    pub label: Option<String>,
}

impl NavEntry {
    /// Resolve the raw entry into its single populated case.
    ///
    /// Returns a human-readable reason on failure; the caller wraps it
    /// with the entry index.
    pub fn resolve(&self) -> Result<NavLink, String> {
        let populated =
            usize::from(self.doc.is_some()) + usize::from(self.href.is_some()) + usize::from(self.search);

        match populated {
            0 => Err("populates no case, set one of `doc`, `href` or `search`".into()),
            1 => self.resolve_single(),
            n => Err(format!(
                "populates {n} cases, exactly one of `doc`, `href`, `search` is allowed"
            )),
        }
    }

    fn resolve_single(&self) -> Result<NavLink, String> {
        if let Some(doc) = &self.doc {
            if doc.is_empty() {
                return Err("`doc` is empty".into());
            }
            return Ok(NavLink::Doc {
                doc: doc.clone(),
                label: self.required_label("doc")?,
            });
        }

        if let Some(href) = &self.href {
            return Ok(NavLink::External {
                href: href.clone(),
                label: self.required_label("href")?,
            });
        }

        // search slot carries no label
        if self.label.is_some() {
            return Err("search slot does not take a `label`".into());
        }
        Ok(NavLink::search_slot())
    }

    fn required_label(&self, case: &str) -> Result<String, String> {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => Ok(label.to_string()),
            _ => Err(format!("`{case}` entry requires a non-empty `label`")),
        }
    }
}

/// A resolved navigation link, exactly one case per entry.
///
/// Serializes into the shape the external builder expects:
/// `{doc, label}`, `{href, label}`, or `{search: true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavLink {
    Doc { doc: String, label: String },
    External { href: String, label: String },
    Search { search: bool },
}

impl NavLink {
    /// The search-slot case; `search` is always `true`.
    pub const fn search_slot() -> Self {
        Self::Search { search: true }
    }

    /// Menu text, absent for the search slot.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Doc { label, .. } | Self::External { label, .. } => Some(label),
            Self::Search { .. } => None,
        }
    }
}

/// Validate every header link, preserving entry order in reported indices.
///
/// Case-shape violations become `InvalidNavLink`; a malformed external
/// target becomes `InvalidUrl`.
pub fn validate_header_links(
    entries: &[NavEntry],
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    for (index, entry) in entries.iter().enumerate() {
        match entry.resolve() {
            Ok(NavLink::External { href, .. }) => {
                validate_absolute_url(&href, field, diag);
            }
            Ok(_) => {}
            Err(reason) => {
                diag.error(ConfigError::InvalidNavLink { index, reason });
            }
        }
    }
}
