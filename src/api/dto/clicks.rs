//! DTOs for click tracking and click listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Click, NewClick};

/// Query parameters of `GET /click`.
///
/// Missing parameters deserialize to empty strings so that validation, not
/// the extractor, decides the response.
#[derive(Debug, Deserialize, Validate)]
pub struct ClickParams {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub affiliate_id: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub campaign_id: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub click_id: String,
}

impl From<ClickParams> for NewClick {
    fn from(p: ClickParams) -> Self {
        NewClick::new(p.affiliate_id, p.campaign_id, p.click_id)
    }
}

/// A recorded click as returned to callers and the dashboard.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub id: i64,
    pub affiliate_id: String,
    pub campaign_id: String,
    pub click_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Click> for ClickInfo {
    fn from(c: Click) -> Self {
        Self {
            id: c.id,
            affiliate_id: c.affiliate_id,
            campaign_id: c.campaign_id,
            click_id: c.click_id,
            created_at: c.created_at,
        }
    }
}
