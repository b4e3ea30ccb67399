//! Build command implementation.
//!
//! Hands the validated configuration to the external builder. The
//! copyright year is decided here, once, and injected downward.

use crate::cli::BuildArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::render;
use crate::utils::date::current_year;
use anyhow::Result;

/// Validate and hand off to the external builder.
pub fn build_site(config: &SiteConfig, args: &BuildArgs) -> Result<()> {
    let year = args.year.unwrap_or_else(current_year);

    let handle = render::render(config, year)?;

    log!("build"; "`{}` finished", handle.command);
    Ok(())
}
