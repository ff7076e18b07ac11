//! Configuration model for diff-todos.
//!
//! This module defines the Config struct that represents `.diff-todos.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod exclude;
mod model;
mod operations;
pub mod types;


// Re-export public API
pub use exclude::ExcludeFilter;
pub use model::Config;
pub use types::CONFIG_FILE_NAME;
