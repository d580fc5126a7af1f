//! Unified error types for Passage.
//!
//! [`PassageError`] covers startup failures (bad upstream URL or prefix,
//! unbindable address) and upstream call failures. Upstream variants are
//! produced by [`relay::upstream`](crate::relay::upstream) and converted
//! into a `502 Bad Gateway` by the relay handler rather than bubbling
//! out of the request path.

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PassageError {
    #[error("Invalid upstream URL '{url}': {reason}")]
    InvalidUpstream { url: String, reason: String },

    #[error("Invalid route prefix '{prefix}': {reason}")]
    InvalidPrefix { prefix: String, reason: String },

    #[error("Invalid address: {0}")]
    AddressParse(#[from] std::net::AddrParseError),

    #[error("Invalid URI: {source}")]
    UriParse {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to build upstream request: {source}")]
    UpstreamRequest {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Upstream unreachable: {source}")]
    UpstreamUnreachable {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Upstream call timed out after {ms}ms")]
    UpstreamTimeout { ms: u64 },

    #[error("Failed to read upstream response body: {source}")]
    UpstreamBody {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP request failed: {source}")]
    HttpRequest {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Health check failed with status {0}")]
    HealthCheckFailed(hyper::StatusCode),
}
