//! Configuration utility types.
//!
//! | Module   | Purpose                                        |
//! |----------|------------------------------------------------|
//! | `error`  | `ConfigError`, field paths, diagnostics        |

mod error;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
