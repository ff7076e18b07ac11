//! Logging setup.
//!
//! Diagnostics go through the `log` facade to stderr via `env_logger`, so
//! stdout only ever carries the report.

use log::LevelFilter;

/// Logging options resolved from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogConfig {
    /// Log at debug level instead of info.
    pub verbose: bool,
}

impl LogConfig {
    pub fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

/// Install the global logger. `RUST_LOG` refines the level from `config`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(config: LogConfig) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.level())
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .format_target(false);

    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
