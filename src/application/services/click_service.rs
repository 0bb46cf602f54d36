//! Click recording service.

use std::sync::Arc;

use crate::application::services::MISSING_PARAMETERS;
use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Service for recording affiliate clicks.
///
/// Duplicate detection is delegated entirely to the store's unique constraint
/// on `click_id`; the service never looks a click up before inserting it.
pub struct ClickService<R: ClickRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ClickRepository + ?Sized> ClickService<R> {
    /// Creates a new click service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Records a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRequest`] if any field is empty. The store is
    /// not touched in that case.
    /// Returns [`AppError::DuplicateClick`] if `click_id` was already recorded.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        if !new_click.is_complete() {
            return Err(AppError::invalid_request(MISSING_PARAMETERS));
        }

        match self.repository.insert(new_click).await {
            Ok(click) => {
                tracing::info!(
                    affiliate_id = %click.affiliate_id,
                    campaign_id = %click.campaign_id,
                    click_id = %click.click_id,
                    "Click recorded"
                );
                Ok(click)
            }
            Err(AppError::DuplicateClick) => {
                tracing::warn!("Duplicate click_id rejected");
                Err(AppError::DuplicateClick)
            }
            Err(e) => Err(e),
        }
    }
}
