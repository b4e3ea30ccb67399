//! Proc macros for docsite.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template for a
//! configuration section struct.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site metadata.
//! pub struct SiteSectionConfig {
//!     /// Site title shown in the header.
//!     pub title: String,
//!
//!     /// Canonical URL of the deployed site.
//!     #[config(inline_doc)]
//!     pub url: String,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub raw: String,
//! }
//!
//! // Generates:
//! // - SiteSectionConfig::FIELDS.title -> FieldPath("site.title")
//! // - SiteSectionConfig::template() -> TOML body with comments
//! // - SiteSectionConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip entirely (internal use)
//! - `#[config(hidden)]` - Keep in FIELDS, hide from template output
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value shown in template
//! - `#[config(sub)]` - Nested Config struct, template recurses
//! - `#[config(inline_doc)]` - Append doc as end-of-line comment
//!
//! # Section inference
//!
//! Without a `section` attribute the path is inferred from the struct name:
//! `AlgoliaConfig` → `algolia`, `BuilderConfig` → `builder`.

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
