//! In-process store implementing both repository traits.
//!
//! Mirrors the PostgreSQL schema: surrogate ids come from sequences, `click_id`
//! is unique and checked under the same lock as the insert, and a conversion
//! must reference an existing click. Each instance is fully isolated.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::entities::{Click, Conversion, NewClick, NewConversion};
use crate::domain::repositories::{ClickRepository, ConversionRepository};
use crate::error::AppError;

#[derive(Default)]
struct Tables {
    clicks: Vec<Click>,
    conversions: Vec<Conversion>,
    next_click_id: i64,
    next_conversion_id: i64,
}

/// Isolated in-memory store.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Current time, never earlier than the previous insert.
fn monotonic_now(previous: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = Utc::now();
    previous.map_or(now, |p| p.max(now))
}

/// Newest first; the surrogate id breaks ties between equal timestamps.
fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> (DateTime<Utc>, i64)) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

#[async_trait]
impl ClickRepository for MemoryStore {
    async fn insert(&self, new_click: NewClick) -> Result<Click, AppError> {
        let mut tables = self.tables.write().await;

        if tables
            .clicks
            .iter()
            .any(|c| c.click_id == new_click.click_id)
        {
            return Err(AppError::DuplicateClick);
        }

        let created_at = monotonic_now(tables.clicks.last().map(|c| c.created_at));
        tables.next_click_id += 1;
        let click = Click::new(
            tables.next_click_id,
            new_click.affiliate_id,
            new_click.campaign_id,
            new_click.click_id,
            created_at,
        );
        tables.clicks.push(click.clone());

        Ok(click)
    }

    async fn find_owned(
        &self,
        click_id: &str,
        affiliate_id: &str,
    ) -> Result<Option<Click>, AppError> {
        let tables = self.tables.read().await;

        Ok(tables
            .clicks
            .iter()
            .filter(|c| c.click_id == click_id && c.is_owned_by(affiliate_id))
            .max_by_key(|c| (c.created_at, c.id))
            .cloned())
    }

    async fn list_by_affiliate(&self, affiliate_id: &str) -> Result<Vec<Click>, AppError> {
        let tables = self.tables.read().await;

        let mut clicks: Vec<Click> = tables
            .clicks
            .iter()
            .filter(|c| c.is_owned_by(affiliate_id))
            .cloned()
            .collect();
        newest_first(&mut clicks, |c| (c.created_at, c.id));

        Ok(clicks)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables.read().await.clicks.len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl ConversionRepository for MemoryStore {
    async fn insert(&self, new_conversion: NewConversion) -> Result<Conversion, AppError> {
        let mut tables = self.tables.write().await;

        if !tables.clicks.iter().any(|c| c.id == new_conversion.click_ref) {
            return Err(AppError::store(sqlx::Error::Protocol(format!(
                "conversions.click_ref {} references no click",
                new_conversion.click_ref
            ))));
        }

        let created_at = monotonic_now(tables.conversions.last().map(|c| c.created_at));
        tables.next_conversion_id += 1;
        let conversion = Conversion::new(
            tables.next_conversion_id,
            new_conversion.click_ref,
            new_conversion.affiliate_id,
            new_conversion.amount,
            new_conversion.currency,
            created_at,
        );
        tables.conversions.push(conversion.clone());

        Ok(conversion)
    }

    async fn list_by_affiliate(&self, affiliate_id: &str) -> Result<Vec<Conversion>, AppError> {
        let tables = self.tables.read().await;

        let mut conversions: Vec<Conversion> = tables
            .conversions
            .iter()
            .filter(|c| c.affiliate_id == affiliate_id)
            .cloned()
            .collect();
        newest_first(&mut conversions, |c| (c.created_at, c.id));

        Ok(conversions)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables.read().await.conversions.len() as i64)
    }
}
