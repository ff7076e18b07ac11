//! Path exclusion by glob pattern.

use crate::diff::DiffRecord;
use crate::error::{DiffTodosError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compiled `exclude` globs.
///
/// Note: in globset `*` also matches `/`, so `vendor/*` covers nested files.
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    globs: GlobSet,
    patterns: Vec<String>,
}

impl ExcludeFilter {
    /// Compile the given patterns.
    ///
    /// # Returns
    ///
    /// * `Err(DiffTodosError::UserError)` - If any pattern is not a valid glob
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();

        for pattern in patterns {
            let glob = Glob::new(&pattern.replace('\\', "/")).map_err(|e| {
                DiffTodosError::UserError(format!(
                    "invalid glob pattern in exclude: '{}' - {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }

        let globs = builder.build().map_err(|e| {
            DiffTodosError::UserError(format!("failed to compile exclude globs: {}", e))
        })?;

        Ok(Self {
            globs,
            patterns: patterns.to_vec(),
        })
    }

    /// Returns the pattern excluding `path`, if any.
    pub fn matching_pattern(&self, path: &str) -> Option<&str> {
        let matches = self.globs.matches(path);
        matches
            .first()
            .and_then(|&i| self.patterns.get(i))
            .map(String::as_str)
    }

    /// Drop records whose destination path is excluded.
    pub fn apply(&self, records: Vec<DiffRecord>) -> Vec<DiffRecord> {
        if self.patterns.is_empty() {
            return records;
        }

        records
            .into_iter()
            .filter(|record| {
                let Some(path) = record.path.as_deref() else {
                    return true;
                };
                match self.matching_pattern(path) {
                    Some(pattern) => {
                        log::debug!("Excluding {} (matches '{}')", path, pattern);
                        false
                    }
                    None => true,
                }
            })
            .collect()
    }
}
