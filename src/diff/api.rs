//! Public API for producing diff records from a repository.

use crate::error::Result;
use crate::git::run_git;
use std::path::Path;

use super::records::split_diff_output;

/// The portion of a diff belonging to one changed file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffRecord {
    /// Repository-relative destination path (forward slashes).
    ///
    /// `None` when the file was deleted; such records are skipped by the scanner.
    pub path: Option<String>,
    /// Raw diff lines from the first hunk header onward, in original order.
    pub body: Vec<String>,
}

impl DiffRecord {
    /// Create a record for `path` from raw diff lines.
    pub fn new<S: AsRef<str>>(path: impl Into<String>, body: &[S]) -> Self {
        Self {
            path: Some(path.into()),
            body: body.iter().map(|l| l.as_ref().to_string()).collect(),
        }
    }
}

/// Compute the diff between two revisions and split it into records.
///
/// Runs `git diff <old> <new>` with colour, external diff drivers, textconv
/// filters and custom prefixes disabled so the output is the files' real lines.
///
/// # Arguments
///
/// * `repo` - The repository root (or any directory inside it)
/// * `old` - The base revision
/// * `new` - The target revision
///
/// # Returns
///
/// * `Ok(Vec<DiffRecord>)` - One record per changed file, in git's order
/// * `Err(DiffTodosError::GitError)` - Git command failed
pub fn diff_records<P: AsRef<Path>>(repo: P, old: &str, new: &str) -> Result<Vec<DiffRecord>> {
    let output = run_git(
        &repo,
        &[
            "-c",
            "core.quotePath=false",
            "diff",
            "--no-color",
            "--no-ext-diff",
            "--no-textconv",
            "--src-prefix=a/",
            "--dst-prefix=b/",
            old,
            new,
            "--",
        ],
    )?;

    Ok(split_diff_output(&output.stdout))
}
