//! Git command runner for diff-todos.
//!
//! Provides a wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations go through this module.

use crate::error::{DiffTodosError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output, with trailing newlines removed.
    ///
    /// Leading and inner whitespace is preserved; diff context lines
    /// consisting of a single space are significant.
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout)
                .trim_end_matches(['\n', '\r'])
                .to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(DiffTodosError::GitError)` - On non-zero exit code or if git cannot be spawned
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    log::debug!("running git {} in {}", args.join(" "), cwd.display());

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            DiffTodosError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(DiffTodosError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// Works from any directory inside the repository.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(DiffTodosError::UserError)` - If `cwd` is not inside a git repository
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();

    if !cwd.is_dir() {
        return Err(DiffTodosError::UserError(format!(
            "repository path '{}' is not a directory",
            cwd.display()
        )));
    }

    let output = Command::new("git")
        .current_dir(cwd)
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| {
            DiffTodosError::UserError(format!("failed to execute git: {} (is git installed?)", e))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(PathBuf::from(git_output.stdout.trim()))
    } else {
        Err(DiffTodosError::UserError(format!(
            "'{}' is not inside a git repository",
            cwd.display()
        )))
    }
}

/// Resolve a revision expression to a full commit SHA.
///
/// Accepts anything `git rev-parse` understands (`HEAD`, `origin/main`,
/// `@{upstream}`, abbreviated SHAs, ...).
///
/// # Returns
///
/// * `Ok(String)` - The full commit SHA
/// * `Err(DiffTodosError::GitError)` - If the revision does not name a commit
pub fn resolve_revision<P: AsRef<Path>>(repo: P, rev: &str) -> Result<String> {
    let expr = format!("{}^{{commit}}", rev);
    let output = run_git(repo, &["rev-parse", "--verify", "--quiet", &expr]).map_err(|_| {
        DiffTodosError::GitError(format!("unknown revision '{}'", rev))
    })?;

    Ok(output.stdout.trim().to_string())
}
