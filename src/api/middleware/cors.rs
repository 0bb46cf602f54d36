//! Cross-origin resource sharing for the dashboard frontend.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS layer.
///
/// The dashboard is served from its own origin and only issues `GET`
/// requests. With `allow_any_origin` disabled, no cross-origin request is
/// allowed and the layer only answers preflights negatively.
pub fn layer(allow_any_origin: bool) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods([Method::GET, Method::OPTIONS]);

    if allow_any_origin {
        layer.allow_origin(Any).allow_headers(Any)
    } else {
        layer
    }
}
