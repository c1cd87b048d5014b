//! # Bugout Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-backed HTTP transport
//! - Conversion of reqwest errors into client errors
//! - Configuration loading (environment, `.env`, JSON/TOML files)
//! - A tracing subscriber helper
//!
//! ## Architecture
//! - Implements traits defined in `bugout-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod config;
pub mod errors;
pub mod http;
pub mod observability;

use std::sync::Arc;

use bugout_core::{Bugout, HttpTransport};
use bugout_domain::{BugoutConfig, Result};

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{ReqwestTransport, ReqwestTransportBuilder};
pub use observability::init_tracing;

/// Build a facade over the reqwest transport from a configuration.
///
/// # Errors
/// Returns `BugoutError::Transport` if the HTTP client cannot be constructed.
pub fn connect(config: &BugoutConfig) -> Result<Bugout> {
    let transport = ReqwestTransport::new()?;
    Ok(connect_with(config, Arc::new(transport)))
}

/// Build a facade from a configuration over a caller-supplied transport.
pub fn connect_with(config: &BugoutConfig, transport: Arc<dyn HttpTransport>) -> Bugout {
    tracing::debug!(
        brood = %config.brood_url,
        spire = %config.spire_url,
        "connecting Bugout client"
    );

    Bugout::new(config.brood_url.clone(), config.spire_url.clone(), transport)
        .with_timeout(config.timeout())
}

/// Load configuration with [`config::load`] and build a facade from it.
///
/// # Errors
/// Returns `BugoutError::Config` if configuration is invalid.
pub fn connect_from_env() -> Result<Bugout> {
    connect(&config::load()?)
}
