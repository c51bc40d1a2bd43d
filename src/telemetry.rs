//! Logging setup

use tracing_subscriber::EnvFilter;

/// Install a `tracing` fmt subscriber filtered by `filter`
///
/// `RUST_LOG` takes precedence when set. Calling this more than once is
/// harmless: later calls leave the first subscriber in place and return false.
pub fn init_tracing(filter: &str) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
