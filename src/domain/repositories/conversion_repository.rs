//! Repository trait for conversion data access.

use crate::domain::entities::{Conversion, NewConversion};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for attributed conversions.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgConversionRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConversionRepository: Send + Sync {
    /// Inserts a conversion referencing an already resolved click.
    ///
    /// No deduplication is performed: the same postback stored twice yields
    /// two rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors, including a
    /// `click_ref` that does not reference an existing click.
    async fn insert(&self, new_conversion: NewConversion) -> Result<Conversion, AppError>;

    /// Lists every conversion of an affiliate, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list_by_affiliate(&self, affiliate_id: &str) -> Result<Vec<Conversion>, AppError>;

    /// Counts all recorded conversions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
