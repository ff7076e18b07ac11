//! Exit code constants for the diff-todos CLI.
//!
//! - 0: Scan succeeded, no labelled lines were added
//! - 1: Scan succeeded and found labelled lines
//! - 2: A hunk header in the diff could not be parsed
//! - 3: Git operation failure
//! - 4: User error (bad config, not a repository)

/// Scan finished without matches.
pub const NO_MATCHES: i32 = 0;

/// Scan finished and reported at least one match.
pub const MATCHES_FOUND: i32 = 1;

/// The diff contained a hunk header that could not be parsed.
pub const PARSE_FAILURE: i32 = 2;

/// Git operation failure: unknown revision, git not runnable, diff failed.
pub const GIT_FAILURE: i32 = 3;

/// User error: invalid config file, invalid glob, not inside a repository.
pub const USER_ERROR: i32 = 4;
