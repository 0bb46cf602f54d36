//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs are deserialized from the query string and validated with
//! `validator` before any service is called. Every response is wrapped in
//! [`envelope::ApiResponse`].

pub mod clicks;
pub mod conversions;
pub mod envelope;
pub mod health;
