//! CLI argument parsing for diff-todos.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The run itself lives in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Report added lines that contain a TODO-style label.
///
/// Compares two revisions of a git repository and lists every added or
/// modified line containing one of the labels. Lines that already held the
/// label and were merely touched are reported too.
///
/// Exit status: 0 no matches, 1 matches found, 2 unparsable diff,
/// 3 git failure, 4 usage or configuration error.
#[derive(Parser, Debug)]
#[command(name = "diff-todos")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Path to the root of the git repository.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Old commit. Default: the upstream tracking branch (`@{upstream}`).
    #[arg(short, long)]
    pub old: Option<String>,

    /// New commit. Default: `HEAD`.
    #[arg(short, long)]
    pub new: Option<String>,

    /// Labels that are searched for. Default: TODO FIXME.
    #[arg(short = 'l', long = "label", num_args = 1..)]
    pub labels: Option<Vec<String>>,

    /// Produce one `path:line: text` line per match.
    #[arg(long, conflicts_with = "json")]
    pub parsable_output: bool,

    /// Emit matches as a JSON object keyed by path and line number.
    #[arg(long)]
    pub json: bool,

    /// Config file. Default: `.diff-todos.yaml` in the repository root, if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// How matches are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Blank line, path, then tab-indented `line: text` entries.
    #[default]
    Grouped,
    /// `path:line: text` per match.
    Parsable,
    /// Nested JSON object.
    Json,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.parsable_output {
            OutputFormat::Parsable
        } else {
            OutputFormat::Grouped
        }
    }
}
