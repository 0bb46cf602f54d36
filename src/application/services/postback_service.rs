//! Postback attribution service.

use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;

use crate::application::services::MISSING_PARAMETERS;
use crate::domain::entities::{Conversion, NewConversion, Postback};
use crate::domain::repositories::{ClickRepository, ConversionRepository};
use crate::error::AppError;

/// Message returned when `amount` is not a decimal literal.
pub const INVALID_AMOUNT: &str = "Invalid amount.";

/// Service that attributes advertiser postbacks to recorded clicks.
///
/// # Resolution
///
/// A postback matches a click only when both `click_id` and `affiliate_id`
/// agree. An unknown `click_id` and a `click_id` owned by another affiliate
/// are indistinguishable to the caller.
///
/// # Idempotency
///
/// There is no idempotency key. Every accepted postback inserts a new
/// conversion, so a click may convert any number of times. Lookup and insert
/// are two independent store operations and are not serialized.
pub struct PostbackService<C, V>
where
    C: ClickRepository + ?Sized,
    V: ConversionRepository + ?Sized,
{
    click_repository: Arc<C>,
    conversion_repository: Arc<V>,
}

impl<C, V> PostbackService<C, V>
where
    C: ClickRepository + ?Sized,
    V: ConversionRepository + ?Sized,
{
    /// Creates a new postback service.
    pub fn new(click_repository: Arc<C>, conversion_repository: Arc<V>) -> Self {
        Self {
            click_repository,
            conversion_repository,
        }
    }

    /// Records a conversion for the click referenced by the postback.
    ///
    /// `amount` is stored as reported (any sign, any scale) and `currency` is
    /// not checked against a code list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRequest`] if a field is empty or `amount` is
    /// not a decimal number. The store is not touched in that case.
    /// Returns [`AppError::UnknownClick`] if no click with this `click_id` is
    /// owned by `affiliate_id`.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn record_conversion(&self, postback: Postback) -> Result<Conversion, AppError> {
        if !postback.is_complete() {
            return Err(AppError::invalid_request(MISSING_PARAMETERS));
        }

        let amount = BigDecimal::from_str(postback.amount.trim())
            .map_err(|_| AppError::invalid_request(INVALID_AMOUNT))?;

        let Some(click) = self
            .click_repository
            .find_owned(&postback.click_id, &postback.affiliate_id)
            .await?
        else {
            tracing::warn!(
                affiliate_id = %postback.affiliate_id,
                click_id = %postback.click_id,
                "Postback ignored: no matching click for affiliate"
            );
            return Err(AppError::UnknownClick);
        };

        let new_conversion = NewConversion {
            click_ref: click.id,
            affiliate_id: postback.affiliate_id,
            amount,
            currency: postback.currency,
        };

        let conversion = self.conversion_repository.insert(new_conversion).await?;

        tracing::info!(
            affiliate_id = %conversion.affiliate_id,
            click_ref = conversion.click_ref,
            amount = %conversion.amount,
            currency = %conversion.currency,
            "Conversion recorded"
        );

        Ok(conversion)
    }
}
