//! Click entity representing a tracked visit through an affiliate link.

use chrono::{DateTime, Utc};

/// A click recorded by the click recorder.
///
/// `click_id` is supplied by the caller and is unique across all affiliates.
/// `id` is the store-assigned surrogate used to link conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub id: i64,
    pub affiliate_id: String,
    pub campaign_id: String,
    pub click_id: String,
    pub created_at: DateTime<Utc>,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(
        id: i64,
        affiliate_id: String,
        campaign_id: String,
        click_id: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            affiliate_id,
            campaign_id,
            click_id,
            created_at,
        }
    }

    /// Returns true if the click belongs to the given affiliate.
    pub fn is_owned_by(&self, affiliate_id: &str) -> bool {
        self.affiliate_id == affiliate_id
    }
}

/// Input data for recording a click.
///
/// The timestamp and surrogate id are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClick {
    pub affiliate_id: String,
    pub campaign_id: String,
    pub click_id: String,
}

impl NewClick {
    pub fn new(
        affiliate_id: impl Into<String>,
        campaign_id: impl Into<String>,
        click_id: impl Into<String>,
    ) -> Self {
        Self {
            affiliate_id: affiliate_id.into(),
            campaign_id: campaign_id.into(),
            click_id: click_id.into(),
        }
    }

    /// Returns true if every required field is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.affiliate_id.is_empty() && !self.campaign_id.is_empty() && !self.click_id.is_empty()
    }
}
