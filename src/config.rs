//! Startup configuration for the proxy.
//!
//! [`ProxyConfig`] is assembled once from the CLI arguments and is
//! immutable for the lifetime of the process. Validation happens here,
//! at startup, so a bad upstream URL or prefix is a launch failure with
//! a clear message instead of a per-request surprise.

use std::time::Duration;

use url::Url;

use crate::error::PassageError;

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Upstream base URL, normalized without a trailing slash.
    pub upstream_base: String,

    /// Inbound path segment requests are accepted under, without slashes.
    pub prefix: String,

    /// Upstream call timeout in milliseconds.
    pub timeout_ms: u64,

    /// Max inbound request body size in bytes.
    pub max_body: usize,
}

impl ProxyConfig {
    pub fn new(
        upstream: &str,
        prefix: &str,
        timeout_ms: u64,
        max_body: usize,
    ) -> Result<Self, PassageError> {
        validate_upstream_url(upstream)?;
        let prefix = validate_prefix(prefix)?;

        Ok(Self {
            upstream_base: upstream.trim_end_matches('/').to_string(),
            prefix,
            timeout_ms,
            max_body,
        })
    }

    #[must_use]
    pub const fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn validate_upstream_url(upstream: &str) -> Result<(), PassageError> {
    let parsed = Url::parse(upstream).map_err(|e| PassageError::InvalidUpstream {
        url: upstream.to_string(),
        reason: e.to_string(),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(PassageError::InvalidUpstream {
            url: upstream.to_string(),
            reason: format!("unsupported scheme '{scheme}' (expected http or https)"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(PassageError::InvalidUpstream {
            url: upstream.to_string(),
            reason: "URL has no host".into(),
        });
    }

    Ok(())
}

/// Normalize and validate the route prefix: a single non-empty path
/// segment, leading/trailing slashes tolerated on input.
fn validate_prefix(prefix: &str) -> Result<String, PassageError> {
    let trimmed = prefix.trim_matches('/');

    if trimmed.is_empty() {
        return Err(PassageError::InvalidPrefix {
            prefix: prefix.to_string(),
            reason: "prefix cannot be empty".into(),
        });
    }
    if trimmed.contains('/') {
        return Err(PassageError::InvalidPrefix {
            prefix: prefix.to_string(),
            reason: "prefix must be a single path segment".into(),
        });
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_upstream() {
        let config = ProxyConfig::new("https://api.example.com/svc", "svc", 30_000, 1024).unwrap();
        assert_eq!(config.upstream_base, "https://api.example.com/svc");
        assert_eq!(config.prefix, "svc");
    }

    #[test]
    fn normalizes_trailing_slash_on_upstream() {
        let config = ProxyConfig::new("http://localhost:9000/svc/", "svc", 1000, 1024).unwrap();
        assert_eq!(config.upstream_base, "http://localhost:9000/svc");
    }

    #[test]
    fn normalizes_slashes_around_prefix() {
        let config = ProxyConfig::new("http://localhost:9000", "/svc/", 1000, 1024).unwrap();
        assert_eq!(config.prefix, "svc");
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = ProxyConfig::new("ftp://example.com", "svc", 1000, 1024).unwrap_err();
        assert!(matches!(err, PassageError::InvalidUpstream { .. }));
    }

    #[test]
    fn rejects_unparseable_url() {
        let err = ProxyConfig::new("not a url", "svc", 1000, 1024).unwrap_err();
        assert!(matches!(err, PassageError::InvalidUpstream { .. }));
    }

    #[test]
    fn rejects_empty_prefix() {
        let err = ProxyConfig::new("http://localhost:9000", "/", 1000, 1024).unwrap_err();
        assert!(matches!(err, PassageError::InvalidPrefix { .. }));
    }

    #[test]
    fn rejects_multi_segment_prefix() {
        let err = ProxyConfig::new("http://localhost:9000", "a/b", 1000, 1024).unwrap_err();
        assert!(matches!(err, PassageError::InvalidPrefix { .. }));
    }
}
