//! Utility functions shared across layers.
//!
//! - [`db_error`] - Classification of store errors (unique violations)

pub mod db_error;
