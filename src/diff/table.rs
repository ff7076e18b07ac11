//! Match table produced by a scan.

use serde::Serialize;
use std::collections::BTreeMap;

/// Matched lines keyed by file path, then by new-file line number.
///
/// Files iterate in path order and lines in ascending line order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchTable {
    files: BTreeMap<String, BTreeMap<usize, String>>,
}

impl MatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `text` at `line` of `path`, replacing any previous entry.
    pub fn insert(&mut self, path: &str, line: usize, text: impl Into<String>) {
        self.files
            .entry(path.to_string())
            .or_default()
            .insert(line, text.into());
    }

    /// Look up the text recorded for `path` at `line`.
    #[cfg(test)]
    pub(crate) fn get(&self, path: &str, line: usize) -> Option<&str> {
        self.files.get(path)?.get(&line).map(String::as_str)
    }

    /// Iterate files and their matches.
    pub fn files(&self) -> impl Iterator<Item = (&str, &BTreeMap<usize, String>)> {
        self.files.iter().map(|(path, lines)| (path.as_str(), lines))
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of matched lines across all files.
    pub fn len(&self) -> usize {
        self.files.values().map(BTreeMap::len).sum()
    }
}
