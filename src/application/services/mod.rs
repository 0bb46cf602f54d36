//! Business logic services for the application layer.

pub mod click_service;
pub mod postback_service;
pub mod query_service;

pub use click_service::ClickService;
pub use postback_service::PostbackService;
pub use query_service::QueryService;

/// Message returned when a required parameter is missing or empty.
pub const MISSING_PARAMETERS: &str = "Missing required parameters.";
