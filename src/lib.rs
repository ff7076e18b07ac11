//! diff-todos: report TODO-style labels on lines added between two revisions.
//!
//! The core is [`diff::scan`], which walks unified diff hunks, tracks
//! new-file line numbers and records added lines containing a label. The
//! other modules wrap it into the `diff-todos` command: git access,
//! configuration, context resolution and report rendering.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod logging;
pub mod report;

#[cfg(test)]
mod test_support;
