//! Site directory structure creation.
//!
//! Creates the documentation layout the external builder expects.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Standard site directory structure.
const SITE_DIRS: &[&str] = &["docs", "static"];

/// Starter page referenced by the default nav template.
const QUICKSTART_MD: &str = "---\n\
id: QuickStart\n\
title: Quick Start\n\
---\n\n\
Welcome! Replace this page with your documentation.\n";

/// Create site directory structure at the given root.
///
/// Creates all standard directories and a starter page. The root
/// directory is created if it doesn't exist.
pub fn create_structure(root: &Path) -> Result<()> {
    // Ensure root exists
    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create root directory '{}'", root.display()))?;
    }

    // Create all subdirectories
    for dir in SITE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }

    // Starter page, only if absent
    let quickstart = root.join("docs/QuickStart.md");
    if !quickstart.exists() {
        fs::write(&quickstart, QUICKSTART_MD)
            .with_context(|| format!("Failed to write '{}'", quickstart.display()))?;
    }

    Ok(())
}
