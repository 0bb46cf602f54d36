//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the store behind the click recorder, the postback
//! attributor and the query service.
//!
//! # Implementations
//!
//! - `crate::infrastructure::persistence::Pg*Repository` - PostgreSQL
//! - `crate::infrastructure::persistence::MemoryStore` - isolated in-process store
//! - Mock implementations are auto-generated via `mockall` for unit tests
//!
//! # Available Repositories
//!
//! - [`ClickRepository`] - Click insertion, ownership lookup and listing
//! - [`ConversionRepository`] - Conversion insertion and listing

pub mod click_repository;
pub mod conversion_repository;

pub use click_repository::ClickRepository;
pub use conversion_repository::ConversionRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use conversion_repository::MockConversionRepository;
