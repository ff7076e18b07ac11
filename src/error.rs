//! Error types for the diff-todos CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for diff-todos operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum DiffTodosError {
    /// A hunk header did not match `@@ -a[,b] +c[,d] @@`.
    ///
    /// Carries the offending header line.
    #[error("Failed to extract line number from '{0}'")]
    Parse(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Invalid configuration or environment.
    #[error("{0}")]
    UserError(String),
}

impl DiffTodosError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DiffTodosError::Parse(_) => exit_codes::PARSE_FAILURE,
            DiffTodosError::GitError(_) => exit_codes::GIT_FAILURE,
            DiffTodosError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for diff-todos operations.
pub type Result<T> = std::result::Result<T, DiffTodosError>;
