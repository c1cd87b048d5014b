//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Body of a non-success response.
///
/// Servers normally answer with a JSON document (`{"detail": ...}`), but
/// proxies and load balancers may return plain text or HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ErrorBody {
    Json(Value),
    Text(String),
}

impl ErrorBody {
    /// Parse a raw response body, keeping the text when it is not JSON.
    pub fn from_raw(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    /// Server-provided `detail` message, if the body carries one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Json(value) => value.get("detail").and_then(Value::as_str),
            Self::Text(_) => None,
        }
    }
}

impl std::fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Main error type for Bugout client operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum BugoutError {
    /// Caller-supplied arguments violate a local precondition. Raised before
    /// any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The HTTP request could not complete (timeout, DNS, connection refused).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote service answered with a non-success status.
    #[error("Request failed with status {status}: {body}")]
    Request { status: u16, body: ErrorBody },

    /// A success response did not match the expected record schema.
    #[error("Response schema error: {0}")]
    ResponseSchema(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BugoutError {
    /// HTTP status of a [`BugoutError::Request`], `None` for local failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Shorthand for rejecting an empty required string argument.
    pub fn require_non_empty(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Self::Validation(format!("{field} must not be empty")));
        }
        Ok(())
    }
}

/// Result type alias for Bugout operations
pub type Result<T> = std::result::Result<T, BugoutError>;
