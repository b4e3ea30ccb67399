//! `[builder]` external builder invocation settings.
//!
//! The validated configuration is handed to this command as a JSON
//! payload on stdin.
//!
//! # Example
//!
//! ```toml
//! [builder]
//! command = ["npx", "resaurus"]
//! args = ["--no-cache"]
//! quiet = false
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::types::{ConfigDiagnostics, ConfigError};

/// External builder entry point.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "builder")]
pub struct BuilderConfig {
    /// Builder executable and leading arguments (argv). `$DOCSITE_*`
    /// variables and a leading `~` are expanded before execution.
    #[config(default = "[\"resaurus\"]")]
    pub command: Vec<String>,

    /// Extra arguments appended after the command.
    pub args: Vec<String>,

    /// Suppress builder stdout passthrough.
    pub quiet: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            command: vec!["resaurus".into()],
            args: Vec::new(),
            quiet: false,
        }
    }
}

impl BuilderConfig {
    /// Program name for log messages.
    pub fn display_name(&self) -> &str {
        self.command.first().map_or("<unset>", String::as_str)
    }

    /// Validate that an entry point is configured.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let unset = self
            .command
            .first()
            .is_none_or(|program| program.trim().is_empty());
        if unset {
            diag.error_with_hint(
                ConfigError::MissingField(Self::FIELDS.command),
                "set the external builder entry point, e.g.: command = [\"resaurus\"]",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_command() {
        let config = test_parse_config("");
        assert_eq!(config.builder.command, ["resaurus"]);
        assert_eq!(config.builder.display_name(), "resaurus");
        assert!(!config.builder.quiet);
    }

    #[test]
    fn test_custom_command() {
        let config =
            test_parse_config("[builder]\ncommand = [\"npx\", \"resaurus\"]\nquiet = true");
        assert_eq!(config.builder.command, ["npx", "resaurus"]);
        assert_eq!(config.builder.display_name(), "npx");
        assert!(config.builder.quiet);
    }

    #[test]
    fn test_empty_command_rejected() {
        let config = test_parse_config("[builder]\ncommand = []");
        let mut diag = ConfigDiagnostics::new();
        config.builder.validate(&mut diag);

        assert_eq!(diag.len(), 1);
        assert!(matches!(
            diag.errors()[0].error,
            ConfigError::MissingField(field) if field.as_str() == "builder.command"
        ));
    }
}
