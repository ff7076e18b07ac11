//! Entry point for the `diff-todos` CLI.
//!
//! Parses arguments, runs the scan, and maps the outcome to an exit code.

use diff_todos::cli::Cli;
use diff_todos::commands;
use diff_todos::context::ScanContext;
use diff_todos::logging::{self, LogConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    logging::init(LogConfig {
        verbose: cli.verbose,
    });

    let result = ScanContext::resolve(&cli)
        .and_then(|ctx| commands::cmd_scan(&ctx, &mut std::io::stdout().lock()));

    let code = commands::finish(
        &result,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    ExitCode::from(code as u8)
}
