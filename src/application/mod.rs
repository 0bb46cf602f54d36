//! Application layer services implementing the attribution rules.
//!
//! Services validate input, coordinate repository calls and enforce the
//! ownership boundary. They consume repository traits and give HTTP handlers
//! and the admin CLI a single API.
//!
//! # Available Services
//!
//! - [`services::click_service::ClickService`] - Click recording
//! - [`services::postback_service::PostbackService`] - Postback attribution
//! - [`services::query_service::QueryService`] - Per-affiliate listings

pub mod services;
