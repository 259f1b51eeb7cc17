//! Diagnostic logging setup.
//!
//! Logs go to stderr; stdout carries diff previews and reports.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "TABULA_LOG";

/// Default filter directive for a `-v` count.
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter: `TABULA_LOG`, then `RUST_LOG`, then the `-v` level.
fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

/// Install the global subscriber.
pub fn init(verbosity: u8) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .without_time();

    tracing_subscriber::registry()
        .with(filter(verbosity))
        .with(layer)
        .init();
}
