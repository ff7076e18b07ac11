//! Splitting raw `git diff` output into per-file records.

use super::api::DiffRecord;
use super::helpers::{parse_diff_git_line, parse_new_file_line};

/// Split unified diff output into one [`DiffRecord`] per changed file.
///
/// A record starts at every `diff --git` line. The destination path comes
/// from the `+++` line (`/dev/null` means the file was deleted); files
/// without one (binary, mode-only changes, pure renames) fall back to the
/// `b/` side of the `diff --git` line. The body holds every line from the
/// first hunk header up to the next record.
pub fn split_diff_output(diff_output: &str) -> Vec<DiffRecord> {
    let mut records = Vec::new();
    let mut current: Option<RecordBuilder> = None;

    for line in diff_output.lines() {
        if let Some(rest) = line.strip_prefix("diff --git ") {
            if let Some(done) = current.take() {
                records.push(done.finish());
            }
            current = Some(RecordBuilder::new(parse_diff_git_line(rest)));
            continue;
        }

        let Some(builder) = current.as_mut() else {
            // Anything before the first "diff --git" is not part of a file.
            continue;
        };

        if builder.in_hunks {
            builder.body.push(line.to_string());
            continue;
        }

        if line.starts_with("@@") {
            builder.in_hunks = true;
            builder.body.push(line.to_string());
        } else if let Some(rest) = line.strip_prefix("+++ ") {
            if let Some(path) = parse_new_file_line(rest) {
                builder.new_path = Some(path);
            }
        }
        // Extended headers ("index", "new file mode", "--- a/...") are ignored.
    }

    if let Some(done) = current {
        records.push(done.finish());
    }

    records
}

struct RecordBuilder {
    /// Path from the `diff --git` line.
    git_path: Option<String>,
    /// Path from the `+++` line; `Some(None)` for `/dev/null`.
    new_path: Option<Option<String>>,
    in_hunks: bool,
    body: Vec<String>,
}

impl RecordBuilder {
    fn new(git_path: Option<String>) -> Self {
        Self {
            git_path,
            new_path: None,
            in_hunks: false,
            body: Vec::new(),
        }
    }

    fn finish(self) -> DiffRecord {
        let path = match self.new_path {
            Some(path) => path,
            None => self.git_path,
        };
        DiffRecord {
            path,
            body: self.body,
        }
    }
}
