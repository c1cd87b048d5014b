//! Logging setup for binaries and tests
//!
//! The client crates only emit `tracing` events. Installing a subscriber is
//! left to the application; [`init_tracing`] is a ready-made one.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is kept.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init().is_ok()
}
