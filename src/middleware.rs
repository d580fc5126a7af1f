//! Tower middleware layers applied to every response.
//!
//! The relay handler itself never touches CORS: the [`cors_layer`]
//! wraps the whole router so health, 404, and proxied responses all
//! carry the same headers. Browser preflight (`OPTIONS` with an
//! `Origin` and `Access-Control-Request-Method`) is answered by the
//! layer; plain `OPTIONS` requests fall through to the handler's own
//! short-circuit.

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// CORS layer permitting credentialed cross-origin requests.
///
/// Credentialed CORS forbids the `*` origin, so the request origin is
/// reflected instead; requested methods and headers are mirrored back.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
