//! API route configuration.
//!
//! There is no authentication: affiliate identity is a plain parameter, so
//! these routes must only be exposed to trusted callers.

use crate::api::handlers::{
    click_handler, dashboard_clicks_handler, dashboard_conversions_handler, postback_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Tracking and dashboard routes.
///
/// # Endpoints
///
/// - `GET /click`                              - Record a click
/// - `GET /postback`                           - Attribute a conversion
/// - `GET /dashboard/clicks/{affiliate_id}`      - Affiliate clicks, newest first
/// - `GET /dashboard/conversions/{affiliate_id}` - Affiliate conversions, newest first
pub fn tracking_routes() -> Router<AppState> {
    Router::new()
        .route("/click", get(click_handler))
        .route("/postback", get(postback_handler))
        .route(
            "/dashboard/clicks/{affiliate_id}",
            get(dashboard_clicks_handler),
        )
        .route(
            "/dashboard/conversions/{affiliate_id}",
            get(dashboard_conversions_handler),
        )
}
