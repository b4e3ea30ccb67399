//! Show command implementation.
//!
//! Prints the resolved builder payload as JSON, exactly as the external
//! builder would receive it on stdin.

use std::io::{self, Write};

use crate::cli::ShowArgs;
use crate::config::SiteConfig;
use crate::render::RenderPayload;
use crate::utils::date::current_year;
use anyhow::Result;

/// Print the resolved payload to stdout.
pub fn show_config(config: &SiteConfig, args: &ShowArgs) -> Result<()> {
    let year = args.year.unwrap_or_else(current_year);
    let payload = RenderPayload::from_config(config, year)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
