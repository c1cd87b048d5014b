//! Request assembly helpers

use bugout_domain::{BugoutError, Result};
use serde_json::{Map, Value};

/// Headers, query parameters and body of a request, before the URL is known.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParts {
    pub headers: Vec<(String, String)>,
    pub params: Vec<(String, String)>,
    pub json: Option<Value>,
}

impl RequestParts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `Authorization: Bearer <token>`.
    ///
    /// # Errors
    /// Returns `BugoutError::Validation` if the token is empty.
    pub fn bearer(mut self, token: &str) -> Result<Self> {
        BugoutError::require_non_empty("token", token)?;
        self.headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        Ok(self)
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    /// Attach a JSON object body.
    pub fn object(self, body: Map<String, Value>) -> Self {
        self.json(Value::Object(body))
    }
}

/// Join a base URL and a path.
///
/// Removes at most one trailing `/` from `base` and at most one leading `/`
/// from `path`, then joins them with a single `/`.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{base}/{path}")
}
