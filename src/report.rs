//! Rendering of scan results.
//!
//! Output format matches what reviewers and scripts expect:
//! ```text
//!
//! src/player/jump.rs
//! 	45: // TODO: implement cooldown
//! 	67: // FIXME: clamp
//! ```
//! or, with `--parsable-output`:
//! ```text
//! src/player/jump.rs:45: // TODO: implement cooldown
//! src/player/jump.rs:67: // FIXME: clamp
//! ```

use crate::cli::OutputFormat;
use crate::diff::MatchTable;
use crate::error::{DiffTodosError, Result};
use std::fmt::Write;

/// Render `table` in the requested format.
///
/// An empty table renders as an empty string for the text formats and as
/// `{}` for JSON.
pub fn render(table: &MatchTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Grouped => Ok(render_grouped(table)),
        OutputFormat::Parsable => Ok(render_parsable(table)),
        OutputFormat::Json => render_json(table),
    }
}

/// One `path:line: text` line per match.
pub fn render_parsable(table: &MatchTable) -> String {
    let mut out = String::new();
    for (path, lines) in table.files() {
        for (line_num, text) in lines {
            let _ = writeln!(out, "{}:{}: {}", path, line_num, text);
        }
    }
    out
}

/// For each file: a blank line, the path, then `\t<line>: <text>` per match.
pub fn render_grouped(table: &MatchTable) -> String {
    let mut out = String::new();
    for (path, lines) in table.files() {
        out.push('\n');
        out.push_str(path);
        out.push('\n');
        for (line_num, text) in lines {
            let _ = writeln!(out, "\t{}: {}", line_num, text);
        }
    }
    out
}

/// Pretty-printed `{ "<path>": { "<line>": "<text>" } }`.
pub fn render_json(table: &MatchTable) -> Result<String> {
    let mut json = serde_json::to_string_pretty(table).map_err(|e| {
        DiffTodosError::UserError(format!("failed to serialize matches to JSON: {}", e))
    })?;
    json.push('\n');
    Ok(json)
}
