//! The single upstream HTTP call.
//!
//! [`send`] builds a hyper request from the already-filtered headers and
//! raw body bytes, executes it under the configured timeout, and
//! collects the full response. The legacy hyper client never follows
//! redirects, so 3xx responses come back here and are relayed to the
//! caller as-is.

use std::time::{Duration, Instant};

use axum::http::{HeaderMap, Method, StatusCode};
use bytes::Bytes;
use http_body_util::{BodyExt, Full};

use crate::error::PassageError;
use crate::server::HttpClient;

pub struct UpstreamRequest<'a> {
    pub client: &'a HttpClient,
    pub method: Method,
    pub url: &'a str,
    pub headers: &'a HeaderMap,
    pub body: Bytes,
    pub timeout: Duration,
}

#[allow(clippy::cast_possible_truncation)]
pub async fn send(req: UpstreamRequest<'_>) -> Result<(StatusCode, HeaderMap, Bytes), PassageError> {
    let mut builder = hyper::Request::builder().method(req.method).uri(req.url);
    for (key, value) in req.headers {
        builder = builder.header(key, value);
    }

    let outbound =
        builder
            .body(Full::new(req.body))
            .map_err(|e| PassageError::UpstreamRequest {
                source: Box::new(e),
            })?;

    let start = Instant::now();
    let timeout_ms = req.timeout.as_millis() as u64;

    let response = tokio::time::timeout(req.timeout, req.client.request(outbound))
        .await
        .map_err(|_| PassageError::UpstreamTimeout { ms: timeout_ms })?
        .map_err(|e| PassageError::UpstreamUnreachable {
            source: Box::new(e),
        })?;

    let status = response.status();
    let headers = response.headers().clone();

    let body = response
        .into_body()
        .collect()
        .await
        .map_err(|e| PassageError::UpstreamBody {
            source: Box::new(e),
        })?
        .to_bytes();

    tracing::debug!(
        status = status.as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        bytes = body.len(),
        "upstream responded"
    );

    Ok((status, headers, body))
}
