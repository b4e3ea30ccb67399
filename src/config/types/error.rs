//! Configuration error types and diagnostics collection.

use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// FieldPath
// ============================================================================

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors.
///
/// # Example
///
/// ```ignore
/// // Generated:
/// impl SiteSectionConfig {
///     pub const FIELDS: SiteSectionConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(ConfigError::MissingField(SiteSectionConfig::FIELDS.title));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("required field {0} is not set")]
    MissingField(FieldPath),

    #[error("invalid URL in {field}: {reason}")]
    InvalidUrl { field: FieldPath, reason: String },

    #[error("`{value}` must start and end with `/`")]
    InvalidBaseUrl { value: String },

    #[error("nav link {index}: {reason}")]
    InvalidNavLink { index: usize, reason: String },

    #[error("search credentials incomplete, {missing} is not set")]
    IncompleteAlgolia { missing: FieldPath },

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

impl ConfigError {
    /// Config field the error points at, when it has one.
    pub fn field(&self) -> Option<FieldPath> {
        match self {
            Self::MissingField(field) | Self::InvalidUrl { field, .. } => Some(*field),
            Self::InvalidBaseUrl { .. } => Some(FieldPath::new("site.base_url")),
            Self::InvalidNavLink { .. } => Some(FieldPath::new("site.header_links")),
            Self::IncompleteAlgolia { .. } => Some(FieldPath::new("algolia")),
            Self::Io(..) | Self::Toml(_) | Self::Diagnostics(_) => None,
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug)]
pub struct ConfigDiagnostic {
    /// The validation failure
    pub error: ConfigError,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(error: ConfigError) -> Self {
        Self { error, hint: None }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        if let Some(field) = self.error.field() {
            writeln!(
                f,
                "{}{}{}",
                "[".dimmed(),
                field.as_str().cyan(),
                "]".dimmed()
            )?;
        }
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.error)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Collected non-fatal findings, printed after validation.
    hints: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, error: ConfigError) {
        self.errors.push(ConfigDiagnostic::new(error));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(&mut self, error: ConfigError, hint: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(error).with_hint(hint));
    }

    /// Add a non-fatal hint (collected for batch display).
    pub fn hint(&mut self, field: FieldPath, message: impl Into<String>) {
        self.hints.push((field, message.into()));
    }

    /// Print collected hints in a grouped format.
    ///
    /// Call this after validation to display all findings at once.
    pub fn print_hints(&self) {
        if self.hints.is_empty() {
            return;
        }

        for (field, message) in &self.hints {
            crate::log!("hint"; "[{}] {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
