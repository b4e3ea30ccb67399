//! Configuration file generation.
//!
//! Creates docsite.toml and ignore files for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::{BuilderConfig, SiteSectionConfig};

/// Default config filename
const CONFIG_FILE: &str = "docsite.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Generate docsite.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Docsite configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# https://github.com/docsite-rs/docsite\n\n");

    // [site] section
    out.push_str(&SiteSectionConfig::template_with_header());
    out.push('\n');

    // Header navigation, rendered left to right in this order
    out.push_str(
        "# Ordered header navigation entries, rendered left to right.\n\
         # Each entry is exactly one of: an internal doc page, an external\n\
         # link, or the search box slot.\n\
         [[site.header_links]]\n\
         doc = \"QuickStart\"\n\
         label = \"Docs\"\n\n\
         # [[site.header_links]]\n\
         # href = \"https://github.com/you/your-project\"\n\
         # label = \"GitHub\"\n\n\
         # [[site.header_links]]\n\
         # search = true\n",
    );
    out.push('\n');

    // [algolia] section, disabled by default
    out.push_str(
        "# Optional search indexing credentials.\n\
         # Leave commented out to keep search indexing disabled.\n\
         # [algolia]\n\
         # api_key = \"\"\n\
         # index_name = \"\"\n",
    );
    out.push('\n');

    // [builder] section
    out.push_str(&BuilderConfig::template_with_header());

    out
}

/// Write default docsite.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
///
/// Patterns include:
/// - Builder output directory (`/build/`)
/// - OS-specific files (`.DS_Store`)
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let patterns = ["/build/", ".DS_Store"];
    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}
