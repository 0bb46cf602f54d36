//! Read-only retrieval of an affiliate's clicks and conversions.

use std::sync::Arc;

use crate::domain::entities::{Click, Conversion};
use crate::domain::repositories::{ClickRepository, ConversionRepository};
use crate::error::AppError;

/// Service feeding the dashboard listings.
///
/// Results are filtered by exact `affiliate_id`, ordered newest first and
/// never paginated. Nothing is cached; every call round-trips to the store.
pub struct QueryService<C, V>
where
    C: ClickRepository + ?Sized,
    V: ConversionRepository + ?Sized,
{
    click_repository: Arc<C>,
    conversion_repository: Arc<V>,
}

impl<C, V> QueryService<C, V>
where
    C: ClickRepository + ?Sized,
    V: ConversionRepository + ?Sized,
{
    /// Creates a new query service.
    pub fn new(click_repository: Arc<C>, conversion_repository: Arc<V>) -> Self {
        Self {
            click_repository,
            conversion_repository,
        }
    }

    /// Lists the affiliate's clicks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn list_clicks(&self, affiliate_id: &str) -> Result<Vec<Click>, AppError> {
        self.click_repository.list_by_affiliate(affiliate_id).await
    }

    /// Lists the affiliate's conversions, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn list_conversions(&self, affiliate_id: &str) -> Result<Vec<Conversion>, AppError> {
        self.conversion_repository
            .list_by_affiliate(affiliate_id)
            .await
    }

    /// Returns `(clicks, conversions)` totals across all affiliates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn totals(&self) -> Result<(i64, i64), AppError> {
        tokio::try_join!(
            self.click_repository.count(),
            self.conversion_repository.count()
        )
    }

    /// Checks that the store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.click_repository.ping().await
    }
}
