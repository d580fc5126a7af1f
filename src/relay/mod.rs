//! Core HTTP request forwarding handler.
//!
//! [`relay_handler`] receives every request matched under the configured
//! prefix, short-circuits `OPTIONS`, builds the upstream URL from the
//! path remainder and raw query string, filters the inbound headers, and
//! relays the upstream response back with its own header set filtered.
//! Submodules handle header filtering ([`headers`]) and the upstream
//! call itself ([`upstream`]).

pub mod headers;
pub mod upstream;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::server::AppState;

pub async fn relay_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    req_headers: HeaderMap,
    body: Bytes,
) -> Response {
    // CORS preflight and plain OPTIONS probes are answered locally; the
    // CORS layer decorates the response on its way out.
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let correlation_id = req_headers
        .get("x-correlation-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| uuid::Uuid::new_v4().to_string(), String::from);

    let config = &state.config;
    let rest = path_remainder(uri.path(), &config.prefix);
    let upstream_url = build_upstream_url(&config.upstream_base, rest, uri.query());

    let outbound_headers = headers::filter_request_headers(&req_headers);

    tracing::info!(
        correlation_id = %correlation_id,
        method = %method,
        url = %upstream_url,
        "forwarding to upstream"
    );
    tracing::debug!(
        correlation_id = %correlation_id,
        headers = ?outbound_headers,
        "outbound headers"
    );

    let result = upstream::send(upstream::UpstreamRequest {
        client: &state.http_client,
        method,
        url: &upstream_url,
        headers: &outbound_headers,
        body,
        timeout: config.upstream_timeout(),
    })
    .await;

    match result {
        Ok((status, mut resp_headers, body_bytes)) => {
            state.stats.relayed.fetch_add(1, Ordering::Relaxed);
            headers::filter_response_headers(&mut resp_headers);

            let mut builder = Response::builder().status(status);
            for (key, value) in &resp_headers {
                builder = builder.header(key, value);
            }
            builder
                .body(axum::body::Body::from(body_bytes))
                .unwrap_or_else(|e| {
                    tracing::error!(
                        correlation_id = %correlation_id,
                        error = %e,
                        "failed to build response"
                    );
                    StatusCode::BAD_GATEWAY.into_response()
                })
        }
        Err(e) => {
            state.stats.failed.fetch_add(1, Ordering::Relaxed);
            tracing::error!(
                correlation_id = %correlation_id,
                url = %upstream_url,
                error = %e,
                "upstream call failed"
            );
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

/// Strip `/{prefix}/` from the raw request path, keeping the remainder
/// undecoded so percent-encoding reaches the upstream untouched.
fn path_remainder<'a>(path: &'a str, prefix: &str) -> &'a str {
    path.strip_prefix('/')
        .and_then(|p| p.strip_prefix(prefix))
        .map(|p| p.strip_prefix('/').unwrap_or(p))
        .unwrap_or(path)
}

/// `{upstream_base}/{rest}`, with `?{query}` appended verbatim iff the
/// inbound query string is non-empty.
fn build_upstream_url(base: &str, rest: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{base}/{rest}?{q}"),
        _ => format!("{base}/{rest}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_after_prefix() {
        assert_eq!(path_remainder("/svc/v1/models", "svc"), "v1/models");
    }

    #[test]
    fn remainder_keeps_inner_slashes() {
        assert_eq!(path_remainder("/svc/a/b/c", "svc"), "a/b/c");
    }

    #[test]
    fn remainder_keeps_percent_encoding() {
        assert_eq!(path_remainder("/svc/a%2Fb", "svc"), "a%2Fb");
    }

    #[test]
    fn url_without_query() {
        assert_eq!(
            build_upstream_url("https://api.example.com/svc", "v1/models", None),
            "https://api.example.com/svc/v1/models"
        );
    }

    #[test]
    fn url_with_query_appended_verbatim() {
        assert_eq!(
            build_upstream_url("https://api.example.com/svc", "v1/models", Some("page=2&q=a%20b")),
            "https://api.example.com/svc/v1/models?page=2&q=a%20b"
        );
    }

    #[test]
    fn empty_query_is_dropped() {
        assert_eq!(
            build_upstream_url("https://api.example.com/svc", "v1/models", Some("")),
            "https://api.example.com/svc/v1/models"
        );
    }
}
