//! HTTP middleware for request processing.
//!
//! Provides cross-origin access for the dashboard and request tracing.

pub mod cors;
pub mod tracing;
