//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /click`                              - Click tracking
//! - `GET /postback`                           - Postback attribution
//! - `GET /dashboard/clicks/{affiliate_id}`      - Click listing
//! - `GET /dashboard/conversions/{affiliate_id}` - Conversion listing
//! - `GET /health`                             - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Cross-origin access for the dashboard
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_allow_any_origin` - whether browsers on any origin may call the API
pub fn app_router(state: AppState, cors_allow_any_origin: bool) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::tracking_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(cors::layer(cors_allow_any_origin))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
