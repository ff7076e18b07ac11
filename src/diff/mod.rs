//! Diff scanning for diff-todos.
//!
//! This module turns `git diff` output into per-file [`DiffRecord`]s and
//! scans them for added lines carrying one of the configured labels.
//!
//! The scan is a single synchronous pass:
//! - hunk headers (`@@ -a[,b] +c[,d] @@`) reset the new-file line counter
//! - deleted lines (`-`) are neither counted nor inspected
//! - context and added lines advance the counter
//! - added lines containing a label are recorded by new-file line number

mod api;
mod helpers;
mod labels;
mod parser;
mod records;
mod table;


// Re-export public API
pub use api::{DiffRecord, diff_records};
pub use labels::LabelSet;
pub use parser::scan;
pub use records::split_diff_output;
pub use table::MatchTable;
