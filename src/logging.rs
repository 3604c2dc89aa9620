//! Logging setup
//!
//! Diagnostics go through the `log` facade to stderr; stdout belongs to the
//! game. `RUST_LOG` overrides the level picked from the command line.

use env_logger::Env;
use log::LevelFilter;

/// Default level for a `-v` count
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// Calling this more than once keeps the first logger.
pub fn init(verbosity: u8) {
    let default = level_for(verbosity).as_str().to_ascii_lowercase();
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}
