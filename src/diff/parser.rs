//! Core diff scanning logic.

use crate::error::{DiffTodosError, Result};

use super::api::DiffRecord;
use super::helpers::parse_hunk_new_start;
use super::labels::LabelSet;
use super::table::MatchTable;

/// Scan diff records for added lines containing any of `labels`.
///
/// Each record is walked independently with a line counter that tracks the
/// position in the new version of the file. Records without a destination
/// path (deleted files) are skipped.
///
/// # Arguments
///
/// * `records` - Per-file diff bodies, in diff order
/// * `labels` - Marker strings searched for in added lines
///
/// # Returns
///
/// * `Ok(MatchTable)` - `table[path][line] = text` for every matching added line
/// * `Err(DiffTodosError::Parse)` - A hunk header could not be parsed, or its line numbers
///   overflow; the whole scan aborts
pub fn scan(records: &[DiffRecord], labels: &LabelSet) -> Result<MatchTable> {
    let mut matches = MatchTable::new();

    for record in records {
        let Some(path) = record.path.as_deref() else {
            continue;
        };

        let mut line_num: usize = 0;
        let mut header = "";

        for line in &record.body {
            if line.starts_with('-') || line.starts_with('\\') {
                // Deleted lines and "\ No newline at end of file" markers
                // do not exist in the new file.
                continue;
            }

            if line.starts_with("@@") {
                let new_start = parse_hunk_new_start(line)
                    .ok_or_else(|| DiffTodosError::Parse(line.clone()))?;
                // The header's start refers to the line after the header.
                line_num = new_start.saturating_sub(1);
                header = line.as_str();
                continue;
            }

            // Counting past usize::MAX means the header's start was out of range.
            line_num = line_num
                .checked_add(1)
                .ok_or_else(|| DiffTodosError::Parse(header.to_string()))?;

            if let Some(added) = line.strip_prefix('+')
                && labels.matches(line)
            {
                matches.insert(path, line_num, added.trim_start());
            }
        }
    }

    Ok(matches)
}
