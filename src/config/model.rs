//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a diff-todos run.
///
/// This struct represents the contents of `.diff-todos.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
/// Command-line flags take precedence over every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Marker strings searched for in added lines.
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,

    /// Base revision to diff from.
    #[serde(default = "default_old")]
    pub old: String,

    /// Target revision to diff to.
    #[serde(default = "default_new")]
    pub new: String,

    /// Glob patterns for destination paths that are never reported.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            labels: default_labels(),
            old: default_old(),
            new: default_new(),
            exclude: Vec::new(),
        }
    }
}
