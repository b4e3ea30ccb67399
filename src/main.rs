//! Docsite - configuration front-end for documentation-site builders.
//!
//! Validates `docsite.toml` and hands the configuration record to the
//! external builder entry point.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // Loading validates everything; no partial configuration survives this
    let config = SiteConfig::load(cli)?;

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&config, name.is_some(), *dry),
        Commands::Check => cli::check::check_site(&config),
        Commands::Build { args } => cli::build::build_site(&config, args),
        Commands::Show { args } => cli::show::show_config(&config, args),
    }
}
