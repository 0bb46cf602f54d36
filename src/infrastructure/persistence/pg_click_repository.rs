//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL repository for recorded clicks.
///
/// Duplicate `click_id` values are rejected by the `clicks_click_id_key`
/// unique constraint inside the `INSERT` itself, which keeps concurrent
/// submissions of the same id race-free.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    affiliate_id: String,
    campaign_id: String,
    click_id: String,
    created_at: DateTime<Utc>,
}

impl From<ClickRow> for Click {
    fn from(r: ClickRow) -> Self {
        Click::new(r.id, r.affiliate_id, r.campaign_id, r.click_id, r.created_at)
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn insert(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row = sqlx::query_as::<_, ClickRow>(
            r#"
            INSERT INTO clicks (affiliate_id, campaign_id, click_id)
            VALUES ($1, $2, $3)
            RETURNING id, affiliate_id, campaign_id, click_id, created_at
            "#,
        )
        .bind(&new_click.affiliate_id)
        .bind(&new_click.campaign_id)
        .bind(&new_click.click_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_owned(
        &self,
        click_id: &str,
        affiliate_id: &str,
    ) -> Result<Option<Click>, AppError> {
        let row = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, affiliate_id, campaign_id, click_id, created_at
            FROM clicks
            WHERE click_id = $1 AND affiliate_id = $2
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(click_id)
        .bind(affiliate_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Click::from))
    }

    async fn list_by_affiliate(&self, affiliate_id: &str) -> Result<Vec<Click>, AppError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, affiliate_id, campaign_id, click_id, created_at
            FROM clicks
            WHERE affiliate_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(affiliate_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Click::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
