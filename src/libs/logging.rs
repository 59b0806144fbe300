//! Logging setup for the screensage binary.
//!
//! Structured events are only written in debug mode (`SCREENSAGE_DEBUG` or
//! `RUST_LOG` set); otherwise the messaging macros print plain text and no
//! subscriber is installed.

use super::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "screensage=debug";

/// Installs a stderr `fmt` subscriber when debug mode is on.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initializes logging for tests, writing through the test harness.
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
