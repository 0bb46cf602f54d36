//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Clicks, conversions and the inputs that create them
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Business rules live in services (see [`crate::application::services`])
//!
//! # Attribution Flow
//!
//! 1. `GET /click` records a [`entities::Click`] under a caller-supplied `click_id`
//! 2. `GET /postback` resolves a [`entities::Postback`] to that click by
//!    `click_id` **and** `affiliate_id`
//! 3. A [`entities::Conversion`] is stored referencing the click's surrogate id

pub mod entities;
pub mod repositories;
