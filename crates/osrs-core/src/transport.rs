//! HTTP transport abstraction.
//!
//! API clients describe a GET request as a `JsonRequest` and hand it to an
//! `HttpTransport`, which returns the decoded JSON body. This keeps URL
//! building and response interpretation in the clients and lets tests swap the
//! network for `MockTransport`.

use crate::error::{TransportError, TransportResult};
use parking_lot::Mutex;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Boxed future for dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A GET request for a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRequest {
    /// Full URL without query string.
    pub url: String,
    /// Query parameters, sent URL-encoded.
    pub query: Vec<(String, String)>,
    /// Extra request headers.
    pub headers: Vec<(String, String)>,
}

impl JsonRequest {
    /// Create a GET request for `url`.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Add a request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a header by name (case-insensitive).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Trait for performing JSON GET requests.
///
/// Implementations must fail on transport errors, non-success status codes and
/// bodies that are not valid JSON.
pub trait HttpTransport: Send + Sync {
    /// Perform the request and decode the body as JSON.
    fn get_json(&self, request: JsonRequest) -> BoxFuture<'_, TransportResult<Value>>;
}

/// Arc wrapper for HttpTransport trait objects.
pub type DynTransport = Arc<dyn HttpTransport>;

/// `HttpTransport` backed by a `reqwest::Client`.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a fixed per-request timeout.
    pub fn new(timeout: Duration) -> TransportResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Client(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn get_json(&self, request: JsonRequest) -> BoxFuture<'_, TransportResult<Value>> {
        Box::pin(async move {
            let mut builder = self.client.get(&request.url);
            if !request.query.is_empty() {
                builder = builder.query(&request.query);
            }
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            let response = builder
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(TransportError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            let body: Value = response
                .json()
                .await
                .map_err(|e| TransportError::Decode(e.to_string()))?;

            debug!(url = %request.url, "Received JSON response");
            Ok(body)
        })
    }
}

/// Mock transport for testing.
///
/// Responses are registered per URL; requests are recorded for verification.
/// Unregistered URLs answer with HTTP 404.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, TransportResult<Value>>>,
    requests: Mutex<Vec<JsonRequest>>,
}

impl MockTransport {
    /// Create a mock with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests for `url` with `body`.
    pub fn respond(&self, url: impl Into<String>, body: Value) {
        self.responses.lock().insert(url.into(), Ok(body));
    }

    /// Answer requests for `url` with `error`.
    pub fn fail(&self, url: impl Into<String>, error: TransportError) {
        self.responses.lock().insert(url.into(), Err(error));
    }

    /// Get recorded requests.
    pub fn requests(&self) -> Vec<JsonRequest> {
        self.requests.lock().clone()
    }

    /// Number of recorded requests for `url`.
    pub fn request_count(&self, url: &str) -> usize {
        self.requests.lock().iter().filter(|r| r.url == url).count()
    }

    /// Clear recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().clear();
    }
}

impl HttpTransport for MockTransport {
    fn get_json(&self, request: JsonRequest) -> BoxFuture<'_, TransportResult<Value>> {
        Box::pin(async move {
            let response = self
                .responses
                .lock()
                .get(&request.url)
                .cloned()
                .unwrap_or_else(|| {
                    Err(TransportError::Status {
                        status: 404,
                        body: format!("no mock response for {}", request.url),
                    })
                });
            self.requests.lock().push(request);
            response
        })
    }
}
