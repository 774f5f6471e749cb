//! Cross-origin resource sharing policy.

use tower_http::cors::{Any, CorsLayer};

/// Creates a CORS layer permitting requests from any origin.
///
/// Any method and any request header are allowed, so a browser form served
/// from another host can post JSON to `/login`. Preflight `OPTIONS` requests
/// are answered by the layer itself.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
