use std::time::Duration;

use async_trait::async_trait;
use bugout_core::{HttpRequest, HttpResponse, HttpTransport};
use bugout_domain::{BugoutError, Method, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client as ReqwestClient;
use tracing::debug;

use crate::errors::InfraError;

const DEFAULT_USER_AGENT: &str = concat!("bugout-rust/", env!("CARGO_PKG_VERSION"));

/// [`HttpTransport`] over a shared reqwest connection pool.
///
/// Sends each request exactly once; the timeout carried by the request
/// bounds the whole exchange. Any response the server produced is returned
/// as-is, whatever its status.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: ReqwestClient,
}

impl ReqwestTransport {
    /// Start building a new transport.
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Delete => reqwest::Method::DELETE,
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
    }
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| BugoutError::Validation(format!("invalid header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| BugoutError::Validation(format!("invalid value for header {name}: {e}")))?;
        map.append(name, value);
    }
    Ok(map)
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest { method, url, headers, params, json, timeout } = request;

        let mut builder = self
            .client
            .request(to_reqwest_method(method), &url)
            .timeout(timeout)
            .headers(header_map(&headers)?);

        if !params.is_empty() {
            builder = builder.query(&params);
        }
        if let Some(body) = &json {
            builder = builder.json(body);
        }

        debug!(%method, %url, "sending HTTP request");

        let response = builder.send().await.map_err(|err| {
            debug!(%method, %url, error = %err, "HTTP request failed");
            BugoutError::from(InfraError::from(err))
        })?;

        let status = response.status().as_u16();
        debug!(%method, %url, status, "received HTTP response");

        let body = response.text().await.map_err(|err| BugoutError::from(InfraError::from(err)))?;

        Ok(HttpResponse { status, body })
    }
}

/// Builder for [`ReqwestTransport`].
#[derive(Debug)]
pub struct ReqwestTransportBuilder {
    connect_timeout: Option<Duration>,
    user_agent: String,
    default_headers: Option<HeaderMap>,
    no_proxy: bool,
}

impl Default for ReqwestTransportBuilder {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_headers: None,
            no_proxy: false,
        }
    }
}

impl ReqwestTransportBuilder {
    /// Upper bound on establishing a connection, independent of the
    /// per-request timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    /// Ignore `HTTP_PROXY`/`HTTPS_PROXY` and connect directly.
    pub fn no_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    pub fn build(self) -> Result<ReqwestTransport> {
        let mut builder = ReqwestClient::builder().user_agent(self.user_agent);

        if self.no_proxy {
            builder = builder.no_proxy();
        }

        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        let client = builder.build().map_err(|err| BugoutError::from(InfraError::from(err)))?;

        Ok(ReqwestTransport { client })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn direct() -> ReqwestTransport {
        ReqwestTransport::builder().no_proxy().build().unwrap()
    }

    fn request(method: Method, url: String) -> HttpRequest {
        HttpRequest {
            method,
            url,
            headers: Vec::new(),
            params: Vec::new(),
            json: None,
            timeout: Duration::from_secs(2),
        }
    }

    #[tokio::test]
    async fn forwards_headers_params_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/journals"))
            .and(header("authorization", "Bearer t"))
            .and(query_param("api", "journals"))
            .and(body_json(json!({"name": "Notes"})))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let transport = direct();
        let mut req = request(Method::Post, format!("{}/journals", server.uri()));
        req.headers.push(("Authorization".into(), "Bearer t".into()));
        req.params.push(("api".into(), "journals".into()));
        req.json = Some(json!({"name": "Notes"}));

        let response = transport.send(req).await.unwrap();

        assert_eq!(response, HttpResponse { status: 200, body: r#"{"ok":true}"#.into() });
    }

    #[tokio::test]
    async fn returns_error_statuses_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = direct();
        let response = transport.send(request(Method::Get, server.uri())).await.unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(response.body, "boom");
    }

    #[tokio::test]
    async fn request_timeout_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let transport = direct();
        let mut req = request(Method::Get, server.uri());
        req.timeout = Duration::from_millis(50);

        let err = transport.send(req).await.unwrap_err();

        assert!(matches!(err, BugoutError::Transport(_)), "{err:?}");
    }

    #[tokio::test]
    async fn sends_no_body_when_json_is_absent() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let transport = direct();
        let response = transport.send(request(Method::Delete, server.uri())).await.unwrap();

        assert_eq!(response.status, 204);
        let received = server.received_requests().await.unwrap();
        assert!(received[0].body.is_empty());
    }

    #[test]
    fn proxy_bypass_is_opt_in() {
        assert!(!ReqwestTransport::builder().no_proxy);
        assert!(ReqwestTransport::builder().no_proxy().no_proxy);
        assert!(ReqwestTransport::new().is_ok());
    }

    #[test]
    fn rejects_invalid_header_value() {
        let headers = vec![("Authorization".to_string(), "Bearer \n".to_string())];
        assert!(matches!(header_map(&headers), Err(BugoutError::Validation(_))));
    }

    #[test]
    fn maps_every_method() {
        assert_eq!(to_reqwest_method(Method::Get), reqwest::Method::GET);
        assert_eq!(to_reqwest_method(Method::Post), reqwest::Method::POST);
        assert_eq!(to_reqwest_method(Method::Put), reqwest::Method::PUT);
        assert_eq!(to_reqwest_method(Method::Delete), reqwest::Method::DELETE);
    }
}
