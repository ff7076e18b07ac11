//! Config loading, discovery, and validation.

use super::model::Config;
use super::types::CONFIG_FILE_NAME;
use crate::error::{DiffTodosError, Result};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DiffTodosError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DiffTodosError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            DiffTodosError::UserError(format!("{} (in '{}')", e, path.display()))
        })
    }

    /// Resolve the config for a repository.
    ///
    /// An explicit path must exist. Otherwise `.diff-todos.yaml` at the
    /// repository root is used when present, and built-in defaults when not.
    ///
    /// # Returns
    ///
    /// The config plus the file it came from, if any.
    pub fn discover(repo_root: &Path, explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let candidate = repo_root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            log::debug!("Loading config from {}", candidate.display());
            Ok((Self::load(&candidate)?, Some(candidate)))
        } else {
            log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            Ok((Self::default(), None))
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            DiffTodosError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `labels` entries must be non-empty
    /// - `old` and `new` must be non-empty
    /// - `exclude` entries must be valid globs
    pub fn validate(&self) -> Result<()> {
        if self.labels.iter().any(|label| label.is_empty()) {
            return Err(DiffTodosError::UserError(
                "config validation failed: labels entries must be non-empty".to_string(),
            ));
        }

        if self.old.trim().is_empty() || self.new.trim().is_empty() {
            return Err(DiffTodosError::UserError(
                "config validation failed: old and new revisions must be non-empty".to_string(),
            ));
        }

        super::exclude::ExcludeFilter::new(&self.exclude)?;

        Ok(())
    }
}
