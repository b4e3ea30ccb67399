//! External builder hand-off.
//!
//! Serializes the validated configuration and invokes the configured
//! builder command with the payload on stdin. This module never runs on a
//! configuration that failed validation.

mod payload;

pub use payload::{AlgoliaPayload, RenderPayload};

use crate::config::SiteConfig;
use crate::log;
use crate::utils::exec::Cmd;
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;

/// Outcome of a completed builder invocation.
#[derive(Debug)]
pub struct BuilderHandle {
    /// Program name, for log messages.
    pub command: String,
    /// Exit status of the builder process.
    pub status: std::process::ExitStatus,
}

// ============================================================================
// Environment Variables
// ============================================================================

/// Build `$DOCSITE_*` environment variables for the builder process
pub fn build_env_vars(config: &SiteConfig, year: u16) -> FxHashMap<String, String> {
    let mut vars = FxHashMap::default();

    vars.insert(
        "DOCSITE_ROOT".into(),
        config.get_root().display().to_string(),
    );
    vars.insert("DOCSITE_PROJECT".into(), config.site.project_name.clone());
    vars.insert("DOCSITE_URL".into(), config.site.url.clone());
    vars.insert("DOCSITE_YEAR".into(), year.to_string());

    vars
}

/// Resolve `$DOCSITE_*` variables in command arguments
///
/// Replaces occurrences of `$DOCSITE_XXX` with actual values from the vars map
pub fn resolve_args(args: &[String], vars: &FxHashMap<String, String>) -> Vec<String> {
    args.iter()
        .map(|arg| {
            let mut result = arg.clone();
            for (key, value) in vars {
                let pattern = format!("${}", key);
                result = result.replace(&pattern, value);
            }
            result
        })
        .collect()
}

// ============================================================================
// Hand-off
// ============================================================================

/// Hand the validated configuration to the external builder.
///
/// The payload travels as a single JSON object on the child's stdin; the
/// builder's own output (templating, HTML emission, indexing) is its
/// business. A non-zero exit propagates as an error.
pub fn render(config: &SiteConfig, year: u16) -> Result<BuilderHandle> {
    let payload = RenderPayload::from_config(config, year)?;
    let json = serde_json::to_vec(&payload).context("Failed to serialize builder payload")?;

    let vars = build_env_vars(config, year);
    let mut argv = resolve_args(&config.builder.command, &vars);
    argv.extend(resolve_args(&config.builder.args, &vars));

    // Expand `~` in the program path so `~/bin/resaurus` works
    if let Some(program) = argv.first_mut() {
        *program = shellexpand::tilde(program.as_str()).into_owned();
    }

    if !config.builder.quiet {
        log!("build"; "`{}` running", config.builder.display_name());
    }

    let mut cmd = Cmd::from_slice(&argv).envs(&vars).stdin(json);
    if !config.get_root().as_os_str().is_empty() {
        cmd = cmd.cwd(config.get_root());
    }
    let output = cmd.run()?;

    // Print builder output directly without prefix (unless quiet)
    if !config.builder.quiet {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout = stdout.trim();
        if !stdout.is_empty() {
            println!("{stdout}");
        }
    }

    Ok(BuilderHandle {
        command: config.builder.display_name().to_string(),
        status: output.status,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_resolve_args_simple() {
        let mut vars = FxHashMap::default();
        vars.insert("DOCSITE_ROOT".into(), "/path/to/site".into());
        vars.insert("DOCSITE_PROJECT".into(), "repromise".into());

        let args = vec![
            "resaurus".into(),
            "--root".into(),
            "$DOCSITE_ROOT/doc".into(),
        ];

        let resolved = resolve_args(&args, &vars);
        assert_eq!(resolved[0], "resaurus");
        assert_eq!(resolved[2], "/path/to/site/doc");
    }

    #[test]
    fn test_resolve_args_no_vars() {
        let vars = FxHashMap::default();
        let args = vec!["resaurus".into(), "--watch".into()];
        let resolved = resolve_args(&args, &vars);
        assert_eq!(resolved, args);
    }

    #[test]
    fn test_resolve_args_multiple_vars_in_one_arg() {
        let mut vars = FxHashMap::default();
        vars.insert("DOCSITE_ROOT".into(), "/site".into());
        vars.insert("DOCSITE_PROJECT".into(), "repromise".into());

        let args = vec!["$DOCSITE_ROOT/$DOCSITE_PROJECT".into()];
        let resolved = resolve_args(&args, &vars);
        assert_eq!(resolved[0], "/site/repromise");
    }

    #[test]
    fn test_build_env_vars() {
        let config = test_parse_config("");
        let vars = build_env_vars(&config, 2026);

        assert_eq!(vars["DOCSITE_PROJECT"], "repromise");
        assert_eq!(
            vars["DOCSITE_URL"],
            "https://aantron.github.io/repromise"
        );
        assert_eq!(vars["DOCSITE_YEAR"], "2026");
    }

    #[test]
    fn test_render_runs_configured_command() {
        // `cat` consumes the stdin payload and exits 0; enough to
        // exercise the hand-off end to end.
        let mut config = test_parse_config("[builder]\nquiet = true");
        config.builder.command = vec!["cat".into()];

        let handle = render(&config, 2026).unwrap();
        assert_eq!(handle.command, "cat");
        assert!(handle.status.success());
    }

    #[test]
    fn test_render_propagates_builder_failure() {
        let mut config = test_parse_config("[builder]\nquiet = true");
        config.builder.command = vec!["false".into()];

        assert!(render(&config, 2026).is_err());
    }
}
