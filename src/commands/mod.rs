//! The diff-todos run.
//!
//! # What a run does
//!
//! 1. Resolves both revisions to commits (clean error for typos or a missing upstream)
//! 2. Computes the diff and splits it into per-file records
//! 3. Drops records matching the configured `exclude` globs
//! 4. Scans the remaining records for added lines containing a label
//! 5. Writes the report in the requested format


use crate::context::ScanContext;
use crate::diff::{MatchTable, diff_records, scan};
use crate::error::{DiffTodosError, Result};
use crate::exit_codes;
use crate::git::resolve_revision;
use crate::report;
use std::io::Write;

/// Run a scan for `ctx` and write the report to `out`.
///
/// # Returns
///
/// * `Ok(MatchTable)` - The matches that were reported (possibly empty)
/// * `Err(DiffTodosError::Parse)` - The diff contained an unparsable hunk header
/// * `Err(DiffTodosError::GitError)` - A revision is unknown or git failed
pub fn cmd_scan<W: Write>(ctx: &ScanContext, out: &mut W) -> Result<MatchTable> {
    log::debug!("Repository: {}", ctx.repo_root.display());
    if let Some(source) = &ctx.config_source {
        log::debug!("Config: {}", source.display());
    }
    log::debug!("Old commit: {}", ctx.old);
    log::debug!("New commit: {}", ctx.new);
    log::debug!("Labels: {}", ctx.labels);
    if ctx.labels.is_empty() {
        log::warn!("No labels configured; nothing can match");
    }

    let old_sha = resolve(ctx, &ctx.old)?;
    let new_sha = resolve(ctx, &ctx.new)?;
    log::debug!("Comparing {}..{}", old_sha, new_sha);

    let records = diff_records(&ctx.repo_root, &old_sha, &new_sha)?;
    log::debug!("Diff touches {} file(s)", records.len());

    let records = ctx.exclude.apply(records);

    let matches = scan(&records, &ctx.labels)?;
    log::debug!("Found {} labelled line(s)", matches.len());

    let rendered = report::render(&matches, ctx.format)?;
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| DiffTodosError::UserError(format!("failed to write report: {}", e)))?;

    Ok(matches)
}

/// Report the outcome of a run and pick the process exit code.
///
/// Parse failures are printed to `stdout` in place of the report; every
/// other error goes to `stderr`. Both are prefixed with `Error: `.
pub fn finish<O: Write, E: Write>(
    result: &Result<MatchTable>,
    stdout: &mut O,
    stderr: &mut E,
) -> i32 {
    match result {
        Ok(matches) if matches.is_empty() => exit_codes::NO_MATCHES,
        Ok(_) => exit_codes::MATCHES_FOUND,
        Err(err) => {
            // Nothing useful is left to do if the message cannot be written
            let _ = match err {
                DiffTodosError::Parse(_) => writeln!(stdout, "Error: {}", err),
                _ => writeln!(stderr, "Error: {}", err),
            };
            err.exit_code()
        }
    }
}

fn resolve(ctx: &ScanContext, rev: &str) -> Result<String> {
    resolve_revision(&ctx.repo_root, rev).map_err(|err| {
        if rev.contains("@{u") {
            DiffTodosError::GitError(format!(
                "unknown revision '{}': the current branch has no upstream.\n\
                 Pass the base revision explicitly with --old <rev>.",
                rev
            ))
        } else {
            err
        }
    })
}
