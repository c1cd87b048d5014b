//! Transport adapter bound to one service base URL
//!
//! Turns (method, path, parts, timeout) into an [`HttpRequest`], dispatches
//! it through the [`HttpTransport`] port and normalizes the outcome:
//!
//! - no response → `BugoutError::Transport` (produced by the transport)
//! - non-2xx → `BugoutError::Request` with the parsed JSON or raw text body
//! - 2xx → the parsed JSON value, with no schema validation at this layer

use std::sync::Arc;
use std::time::Duration;

use bugout_domain::constants::PING_PATH;
use bugout_domain::{BugoutError, ErrorBody, Method, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::request::{join_url, RequestParts};
use crate::ports::{HttpRequest, HttpTransport};

#[derive(Clone)]
pub struct ApiCaller {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for ApiCaller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCaller").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl ApiCaller {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { base_url: base_url.into(), transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and return the parsed success body.
    ///
    /// An empty 2xx body (e.g. `204 No Content`) yields `Value::Null`.
    ///
    /// # Errors
    /// - `BugoutError::Transport` if no response was received
    /// - `BugoutError::Request` for any non-2xx status
    /// - `BugoutError::ResponseSchema` if a 2xx body is not JSON
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        parts: RequestParts,
        timeout: Duration,
    ) -> Result<Value> {
        let url = join_url(&self.base_url, path);

        debug!(%method, url = %url, ?timeout, "sending request");

        let request = HttpRequest {
            method,
            url,
            headers: parts.headers,
            params: parts.params,
            json: parts.json,
            timeout,
        };
        let response = self.transport.send(request).await?;

        debug!(%method, path = %path, status = response.status, "received response");

        if !response.is_success() {
            warn!(%method, path = %path, status = response.status, "request rejected by service");
            return Err(BugoutError::Request {
                status: response.status,
                body: ErrorBody::from_raw(&response.body),
            });
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&response.body).map_err(|e| {
            BugoutError::ResponseSchema(format!("response body is not valid JSON: {e}"))
        })
    }

    /// Send one request and validate the success body as `T`.
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        parts: RequestParts,
        timeout: Duration,
    ) -> Result<T> {
        let value = self.call(method, path, parts, timeout).await?;
        decode(value)
    }

    /// Liveness probe: `GET {base}/ping`, returned without schema validation.
    pub async fn ping(&self, timeout: Duration) -> Result<Value> {
        self.call(Method::Get, PING_PATH, RequestParts::new(), timeout).await
    }
}

/// Validate a JSON value against record type `T`.
///
/// # Errors
/// Returns `BugoutError::ResponseSchema` naming the record and the serde
/// failure (which names the missing or mismatched field).
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        let type_name = std::any::type_name::<T>();
        let short = type_name.rsplit("::").next().unwrap_or(type_name);
        BugoutError::ResponseSchema(format!("{short}: {e}"))
    })
}
