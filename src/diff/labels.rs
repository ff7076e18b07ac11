//! Label set used to select added lines.

use std::fmt;

/// Ordered, de-duplicated set of marker strings such as `TODO` or `FIXME`.
///
/// Matching is case-sensitive substring containment against the raw diff
/// line, including its leading `+`. A label inside another token
/// (`TODOS`, `xTODOx`) still matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Build a label set, dropping duplicates while keeping first-seen order.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            if !unique.contains(&label) {
                unique.push(label);
            }
        }
        Self { labels: unique }
    }

    /// Returns true if any label occurs in `line`.
    pub fn matches(&self, line: &str) -> bool {
        self.labels.iter().any(|label| line.contains(label.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_substring_anywhere() {
        let labels = LabelSet::new(["TODO"]);
        assert!(labels.matches("+    // TODO: fix"));
        assert!(labels.matches("+let TODOS = 3;"));
        assert!(!labels.matches("+nothing to see"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let labels = LabelSet::new(["TODO"]);
        assert!(!labels.matches("+// todo"));
    }

    #[test]
    fn empty_set_never_matches() {
        let labels = LabelSet::new(Vec::<String>::new());
        assert!(labels.is_empty());
        assert!(!labels.matches("+// TODO"));
    }

    #[test]
    fn duplicates_are_dropped_in_order() {
        let labels = LabelSet::new(["FIXME", "TODO", "FIXME"]);
        assert_eq!(labels.iter().collect::<Vec<_>>(), vec!["FIXME", "TODO"]);
        assert_eq!(labels.to_string(), "FIXME, TODO");
    }
}
