//! Port interface for HTTP transport
//!
//! The core never talks to the network directly. Every request is described
//! as an [`HttpRequest`] and handed to an [`HttpTransport`] implementation
//! (reqwest in `bugout-infra`, in-memory doubles in tests).

use std::time::Duration;

use async_trait::async_trait;
use bugout_domain::{Method, Result};
use serde_json::Value;

/// Fully resolved outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL, base and path already joined
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Query parameters, in insertion order
    pub params: Vec<(String, String)>,
    /// JSON body; `None` sends no body at all
    pub json: Option<Value>,
    pub timeout: Duration,
}

impl HttpRequest {
    /// Value of the first header matching `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }
}

/// Raw response as received from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for sending one HTTP request and returning the raw response
///
/// Implementations must return `Ok` for every response the server produced,
/// whatever its status, and `Err(BugoutError::Transport)` only when no
/// response was received (timeout, DNS failure, refused connection).
/// Implementations must not retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx() {
        assert!(HttpResponse { status: 200, body: String::new() }.is_success());
        assert!(HttpResponse { status: 204, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 301, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 404, body: String::new() }.is_success());
    }

    #[test]
    fn header_lookup_ignores_case() {
        let request = HttpRequest {
            method: Method::Get,
            url: "http://localhost/user".into(),
            headers: vec![("Authorization".into(), "Bearer t".into())],
            params: vec![("username".into(), "alice".into())],
            json: None,
            timeout: Duration::from_secs(1),
        };
        assert_eq!(request.header("authorization"), Some("Bearer t"));
        assert_eq!(request.param("username"), Some("alice"));
        assert_eq!(request.param("email"), None);
    }
}
