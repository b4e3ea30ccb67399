//! Check command implementation.
//!
//! Validation itself runs during config loading; reaching this point means
//! the configuration is sound. The command confirms that and prints a
//! short summary of what the builder would receive.

use crate::config::{AlgoliaConfig, SiteConfig};
use crate::{debug, log};
use anyhow::Result;

/// Report a validated configuration.
pub fn check_site(config: &SiteConfig) -> Result<()> {
    let file = config
        .config_path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| config.config_path.to_string_lossy());

    let links = config.site.header_links.len();
    let search = config
        .algolia
        .as_ref()
        .is_some_and(AlgoliaConfig::is_enabled);

    log!(
        "check";
        "{} ok: {} nav link{}, search indexing {}",
        file,
        links,
        if links == 1 { "" } else { "s" },
        if search { "enabled" } else { "disabled" }
    );

    debug!("check"; "site: {} ({})", config.site.title, config.site.url);
    debug!(
        "check";
        "builder entry point: `{}`",
        config.builder.display_name()
    );

    Ok(())
}
