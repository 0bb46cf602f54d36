//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod click;
pub mod dashboard;
pub mod health;
pub mod postback;

pub use click::click_handler;
pub use dashboard::{dashboard_clicks_handler, dashboard_conversions_handler};
pub use health::health_handler;
pub use postback::postback_handler;
