//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module    | TOML Section          | Purpose                            |
//! |-----------|-----------------------|------------------------------------|
//! | `site`    | `[site]`              | Site identity and navigation       |
//! | `nav`     | `[[site.header_links]]` | Header navigation entries        |
//! | `algolia` | `[algolia]`           | Search indexing credentials        |
//! | `builder` | `[builder]`           | External builder invocation        |

mod algolia;
mod builder;
pub mod nav;
mod site;

// Re-export section configs
pub use algolia::AlgoliaConfig;
pub use builder::BuilderConfig;
pub use nav::{NavEntry, NavLink};
pub use site::{OnPageNav, SiteSectionConfig};
