//! `[algolia]` search indexing credentials.
//!
//! The section is optional; leaving it out disables search indexing
//! entirely. When present, both credentials must be supplied together.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::types::{ConfigDiagnostics, ConfigError};

/// Credentials for the external search indexing service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "algolia")]
pub struct AlgoliaConfig {
    /// Search-only API key issued by the indexing service.
    #[config(inline_doc)]
    pub api_key: String,

    /// Name of the search index to query.
    #[config(inline_doc)]
    pub index_name: String,
}

impl AlgoliaConfig {
    /// Search indexing is enabled once both credentials are set.
    pub fn is_enabled(&self) -> bool {
        !self.api_key.is_empty() && !self.index_name.is_empty()
    }

    /// Validate that the credentials come as a pair.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match (self.api_key.is_empty(), self.index_name.is_empty()) {
            (false, false) => {}
            (true, true) => {
                // Empty section: search simply stays disabled.
                diag.hint(
                    crate::config::FieldPath::new("algolia"),
                    "section is present but empty, search indexing stays disabled",
                );
            }
            (true, false) => {
                diag.error_with_hint(
                    ConfigError::IncompleteAlgolia {
                        missing: Self::FIELDS.api_key,
                    },
                    "set both credentials or remove the [algolia] section",
                );
            }
            (false, true) => {
                diag.error_with_hint(
                    ConfigError::IncompleteAlgolia {
                        missing: Self::FIELDS.index_name,
                    },
                    "set both credentials or remove the [algolia] section",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_absent_section_disables_search() {
        let config = test_parse_config("");
        assert!(config.algolia.is_none());
    }

    #[test]
    fn test_complete_credentials() {
        let config =
            test_parse_config("[algolia]\napi_key = \"x\"\nindex_name = \"repromise\"");
        let algolia = config.algolia.unwrap();
        assert!(algolia.is_enabled());

        let mut diag = ConfigDiagnostics::new();
        algolia.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_missing_index_name() {
        let config = test_parse_config("[algolia]\napi_key = \"x\"");
        let algolia = config.algolia.unwrap();
        assert!(!algolia.is_enabled());

        let mut diag = ConfigDiagnostics::new();
        algolia.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(matches!(
            diag.errors()[0].error,
            ConfigError::IncompleteAlgolia { missing } if missing.as_str() == "algolia.index_name"
        ));
    }

    #[test]
    fn test_missing_api_key() {
        let config = test_parse_config("[algolia]\nindex_name = \"repromise\"");
        let algolia = config.algolia.unwrap();

        let mut diag = ConfigDiagnostics::new();
        algolia.validate(&mut diag);
        assert!(matches!(
            diag.errors()[0].error,
            ConfigError::IncompleteAlgolia { missing } if missing.as_str() == "algolia.api_key"
        ));
    }

    #[test]
    fn test_empty_section_is_not_an_error() {
        let config = test_parse_config("[algolia]");
        let algolia = config.algolia.unwrap();
        assert!(!algolia.is_enabled());

        let mut diag = ConfigDiagnostics::new();
        algolia.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
