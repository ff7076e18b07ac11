//! Run context resolution for diff-todos.
//!
//! Combines the command line, the optional config file and built-in
//! defaults into one explicit [`ScanContext`]. Precedence is
//! command line > config file > defaults.

use crate::cli::{Cli, OutputFormat};
use crate::config::{Config, ExcludeFilter};
use crate::diff::LabelSet;
use crate::error::Result;
use crate::git;
use std::path::PathBuf;

/// Everything a scan needs, fully resolved.
#[derive(Debug, Clone)]
pub struct ScanContext {
    /// Absolute path to the repository root.
    pub repo_root: PathBuf,

    /// Config file that was loaded, if any.
    pub config_source: Option<PathBuf>,

    /// Base revision expression as given.
    pub old: String,

    /// Target revision expression as given.
    pub new: String,

    pub labels: LabelSet,

    pub exclude: ExcludeFilter,

    pub format: OutputFormat,
}

impl ScanContext {
    /// Resolve the context for a parsed command line.
    ///
    /// # Returns
    ///
    /// * `Ok(ScanContext)` - Successfully resolved context
    /// * `Err(DiffTodosError::UserError)` - Not a repository, or invalid config
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let repo_root = git::get_repo_root(&cli.repo)?;
        let (config, config_source) = Config::discover(&repo_root, cli.config.as_deref())?;

        Self::from_parts(cli, repo_root, config, config_source)
    }

    /// Merge command line and config on top of an already-known repository.
    pub fn from_parts(
        cli: &Cli,
        repo_root: PathBuf,
        config: Config,
        config_source: Option<PathBuf>,
    ) -> Result<Self> {
        let exclude = ExcludeFilter::new(&config.exclude)?;

        let labels = match &cli.labels {
            Some(labels) => LabelSet::new(labels.iter().cloned()),
            None => LabelSet::new(config.labels),
        };

        Ok(Self {
            repo_root,
            config_source,
            old: cli.old.clone().unwrap_or(config.old),
            new: cli.new.clone().unwrap_or(config.new),
            labels,
            exclude,
            format: cli.output_format(),
        })
    }
}
