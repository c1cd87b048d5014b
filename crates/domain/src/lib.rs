//! # Bugout Domain
//!
//! Data model for the Bugout client.
//!
//! This crate contains:
//! - Records returned by Brood (users, tokens, groups) and Spire (journals,
//!   entries, tags, scopes, search results)
//! - Closed enumerations with validating string conversions
//! - The error type and `Result` alias
//! - Client configuration and constants
//!
//! ## Architecture
//! - No dependencies on other Bugout crates
//! - No I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
