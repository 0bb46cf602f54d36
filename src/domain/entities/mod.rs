//! Core domain entities.
//!
//! Entities are plain data structures without persistence or HTTP concerns.
//!
//! # Entity Types
//!
//! - [`Click`] - A recorded visit through an affiliate tracking link
//! - [`Conversion`] - A monetized outcome attributed to a click
//!
//! Creation inputs are separate types: [`NewClick`], [`Postback`] (as received
//! from the advertiser) and [`NewConversion`] (resolved, ready to persist).

pub mod click;
pub mod conversion;

pub use click::{Click, NewClick};
pub use conversion::{Conversion, NewConversion, Postback};
