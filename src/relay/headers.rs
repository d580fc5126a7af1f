//! Header filtering for both directions of the relay.
//!
//! Both filters are pure transforms over a [`HeaderMap`]: everything is
//! copied except a fixed, case-insensitive exclusion set. Nothing is
//! added — `Authorization`, `Cookie`, and any custom headers reach the
//! upstream exactly as the caller sent them.

use http::{header, HeaderMap, HeaderName};

/// Stripped from the inbound request before forwarding. The HTTP client
/// sets its own `Host` and `Content-Length` for the outbound call.
const REQUEST_EXCLUDED: [HeaderName; 3] =
    [header::HOST, header::CONTENT_LENGTH, header::CONNECTION];

/// Stripped from the upstream response before relaying. The body has
/// already been fully collected, so the origin's framing headers are no
/// longer accurate; Axum sets `Content-Length` from the actual bytes.
const RESPONSE_EXCLUDED: [HeaderName; 4] = [
    header::CONTENT_ENCODING,
    header::CONTENT_LENGTH,
    header::TRANSFER_ENCODING,
    header::CONNECTION,
];

#[must_use]
pub fn filter_request_headers(original: &HeaderMap) -> HeaderMap {
    let mut headers = original.clone();
    for name in &REQUEST_EXCLUDED {
        headers.remove(name);
    }
    headers
}

pub fn filter_response_headers(headers: &mut HeaderMap) {
    for name in &RESPONSE_EXCLUDED {
        headers.remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_host_content_length_and_connection() {
        let mut original = HeaderMap::new();
        original.insert("host", "proxy.local:5000".parse().unwrap());
        original.insert("content-length", "42".parse().unwrap());
        original.insert("connection", "keep-alive".parse().unwrap());
        original.insert("content-type", "application/json".parse().unwrap());

        let result = filter_request_headers(&original);

        assert!(result.get("host").is_none());
        assert!(result.get("content-length").is_none());
        assert!(result.get("connection").is_none());
        assert_eq!(result.get("content-type").unwrap(), "application/json");
    }

    #[test]
    fn preserves_authorization_and_cookie() {
        let mut original = HeaderMap::new();
        original.insert("authorization", "Bearer abc".parse().unwrap());
        original.insert("cookie", "session=1; theme=dark".parse().unwrap());
        original.insert("x-custom", "value".parse().unwrap());

        let result = filter_request_headers(&original);

        assert_eq!(result.get("authorization").unwrap(), "Bearer abc");
        assert_eq!(result.get("cookie").unwrap(), "session=1; theme=dark");
        assert_eq!(result.get("x-custom").unwrap(), "value");
    }

    #[test]
    fn request_filter_leaves_original_untouched() {
        let mut original = HeaderMap::new();
        original.insert("host", "proxy.local".parse().unwrap());

        let _ = filter_request_headers(&original);

        assert!(original.get("host").is_some());
    }

    #[test]
    fn strips_response_framing_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("content-encoding", "gzip".parse().unwrap());
        headers.insert("content-length", "128".parse().unwrap());
        headers.insert("transfer-encoding", "chunked".parse().unwrap());
        headers.insert("connection", "close".parse().unwrap());
        headers.insert("x-request-id", "abc123".parse().unwrap());
        headers.insert("set-cookie", "session=2".parse().unwrap());

        filter_response_headers(&mut headers);

        assert!(headers.get("content-encoding").is_none());
        assert!(headers.get("content-length").is_none());
        assert!(headers.get("transfer-encoding").is_none());
        assert!(headers.get("connection").is_none());
        assert_eq!(headers.get("x-request-id").unwrap(), "abc123");
        assert_eq!(headers.get("set-cookie").unwrap(), "session=2");
    }

    #[test]
    fn header_name_matching_is_case_insensitive() {
        // HeaderMap normalizes names to lowercase on insert, so mixed-case
        // inbound headers hit the same exclusion entries.
        let mut original = HeaderMap::new();
        original.insert(
            HeaderName::from_bytes(b"Content-Length").unwrap(),
            "7".parse().unwrap(),
        );

        let result = filter_request_headers(&original);
        assert!(result.get("content-length").is_none());
    }
}
