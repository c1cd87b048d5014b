//! Client constants
//!
//! Default endpoints and limits shared by every crate in the workspace.

// Service endpoints
pub const DEFAULT_BROOD_URL: &str = "https://auth.bugout.dev";
pub const DEFAULT_SPIRE_URL: &str = "https://spire.bugout.dev";

// Request defaults
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
pub const PING_PATH: &str = "ping";

// Search pagination defaults
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;
pub const DEFAULT_SEARCH_OFFSET: i64 = 0;
