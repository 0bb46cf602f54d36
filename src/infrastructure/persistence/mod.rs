//! Repository implementations.
//!
//! PostgreSQL repositories use SQLx prepared statements. All of them share a
//! single `PgPool`; a connection is checked out per statement and returned to
//! the pool whether the statement succeeds or fails.
//!
//! # Repositories
//!
//! - [`PgClickRepository`] - Click storage and ownership lookup
//! - [`PgConversionRepository`] - Conversion storage and listing
//! - [`MemoryStore`] - In-process store implementing both traits, used to give
//!   each test an isolated instance

pub mod memory_store;
pub mod pg_click_repository;
pub mod pg_conversion_repository;

pub use memory_store::MemoryStore;
pub use pg_click_repository::PgClickRepository;
pub use pg_conversion_repository::PgConversionRepository;
