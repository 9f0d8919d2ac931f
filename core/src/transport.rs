//! The I/O seam between `TodoClient` and the network.
//!
//! A `Transport` performs exactly one round-trip per call. Non-2xx
//! responses come back as `HttpResponse` data; only failures to obtain a
//! response at all become `TransportError`. No retries happen here.

use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Method;
use tracing::debug;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `Transport` backed by a pooled `reqwest::Client`.
///
/// The connection is borrowed from the pool for the duration of one call
/// and returned once the body has been read or the response dropped.
/// Redirects are not followed: a 3xx answer is handed back as is, so it
/// surfaces as a remote failure and each call stays a single request.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .map_err(|e| TransportError::with_source("failed to build HTTP client", e))?;
        Ok(Self { client })
    }

    /// Wrap a caller-built client as is.
    ///
    /// The client should be built with `redirect(Policy::none())`; one that
    /// follows redirects turns a 3xx into whatever the target answers.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            TransportError::with_source(format!("{} {} failed", request.method, request.url), e)
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response.text().await.map_err(|e| {
            TransportError::with_source(format!("reading response body from {} failed", request.url), e)
        })?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
