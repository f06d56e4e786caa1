//! Tracing subscriber setup

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber.
///
/// An explicit `cli_level` wins, then `RUST_LOG`, then `config_level`.
/// A subscriber that is already installed is left in place.
pub fn init_logging(cli_level: Option<&str>, config_level: &str) {
    let filter = match cli_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level)),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();

    // Try to set as global default (ignore error if already set)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
