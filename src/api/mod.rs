//! HTTP API layer.
//!
//! Translates query-string requests into service calls and renders every
//! outcome in the `{ status, message?, data? }` envelope.
//!
//! # Modules
//!
//! - [`dto`] - Request parameters and response payloads
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and tracing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
