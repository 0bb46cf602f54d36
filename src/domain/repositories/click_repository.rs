//! Repository trait for click data access.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recorded clicks.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-process implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_click.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Inserts a new click with a store-assigned id and timestamp.
    ///
    /// Uniqueness of `click_id` is enforced by the store in the same atomic
    /// step as the insert. No existence check precedes it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateClick`] if `click_id` already exists.
    /// Returns [`AppError::Store`] on database errors.
    async fn insert(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Finds the click with `click_id` owned by `affiliate_id`.
    ///
    /// A click under a different affiliate yields `Ok(None)`, exactly like an
    /// unknown `click_id`. Should the store ever hold several matches, the most
    /// recently created one is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_owned(
        &self,
        click_id: &str,
        affiliate_id: &str,
    ) -> Result<Option<Click>, AppError>;

    /// Lists every click of an affiliate, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list_by_affiliate(&self, affiliate_id: &str) -> Result<Vec<Click>, AppError>;

    /// Counts all recorded clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Round-trips to the store to verify it is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
