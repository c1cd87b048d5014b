//! Configuration management

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BROOD_URL, DEFAULT_SPIRE_URL, DEFAULT_TIMEOUT_SECONDS};

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugoutConfig {
    /// Base URL of the identity service (users, tokens, groups)
    #[serde(default = "default_brood_url")]
    pub brood_url: String,
    /// Base URL of the content service (journals, entries, scopes)
    #[serde(default = "default_spire_url")]
    pub spire_url: String,
    /// Default per-request timeout, used when a call passes no override
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl BugoutConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_brood_url() -> String {
    DEFAULT_BROOD_URL.to_string()
}

fn default_spire_url() -> String {
    DEFAULT_SPIRE_URL.to_string()
}

const fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for BugoutConfig {
    fn default() -> Self {
        Self {
            brood_url: default_brood_url(),
            spire_url: default_spire_url(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}
