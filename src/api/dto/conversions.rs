//! DTOs for postbacks and conversion listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Conversion, Postback};

/// Query parameters of `GET /postback`.
///
/// `amount` and `currency` are taken verbatim; only presence is checked here.
#[derive(Debug, Deserialize, Validate)]
pub struct PostbackParams {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub affiliate_id: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub click_id: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub amount: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub currency: String,
}

impl From<PostbackParams> for Postback {
    fn from(p: PostbackParams) -> Self {
        Postback::new(p.affiliate_id, p.click_id, p.amount, p.currency)
    }
}

/// An attributed conversion as returned to callers and the dashboard.
///
/// `amount` is rendered as a plain decimal string (never exponent notation)
/// with the scale it was reported in, so no precision is lost in JSON.
#[derive(Debug, Serialize)]
pub struct ConversionInfo {
    pub id: i64,
    pub click_ref: i64,
    pub affiliate_id: String,
    pub amount: String,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl From<Conversion> for ConversionInfo {
    fn from(c: Conversion) -> Self {
        Self {
            id: c.id,
            click_ref: c.click_ref,
            affiliate_id: c.affiliate_id,
            amount: c.amount.to_plain_string(),
            currency: c.currency,
            created_at: c.created_at,
        }
    }
}
