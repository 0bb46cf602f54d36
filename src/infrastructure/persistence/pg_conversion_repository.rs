//! PostgreSQL implementation of the conversion repository.

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Conversion, NewConversion};
use crate::domain::repositories::ConversionRepository;
use crate::error::AppError;

/// PostgreSQL repository for attributed conversions.
///
/// `amount` is stored as `NUMERIC`. The driver decodes it padded to whole
/// base-10000 groups, so every read also selects `scale(amount)` and restores
/// the scale the value was written with.
pub struct PgConversionRepository {
    pool: Arc<PgPool>,
}

impl PgConversionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ConversionRow {
    id: i64,
    click_ref: i64,
    affiliate_id: String,
    amount: BigDecimal,
    amount_scale: i32,
    currency: String,
    created_at: DateTime<Utc>,
}

impl From<ConversionRow> for Conversion {
    fn from(r: ConversionRow) -> Self {
        Conversion::new(
            r.id,
            r.click_ref,
            r.affiliate_id,
            r.amount.with_scale(i64::from(r.amount_scale)),
            r.currency,
            r.created_at,
        )
    }
}

#[async_trait]
impl ConversionRepository for PgConversionRepository {
    async fn insert(&self, new_conversion: NewConversion) -> Result<Conversion, AppError> {
        let row = sqlx::query_as::<_, ConversionRow>(
            r#"
            INSERT INTO conversions (click_ref, affiliate_id, amount, currency)
            VALUES ($1, $2, $3, $4)
            RETURNING id, click_ref, affiliate_id, amount, scale(amount) AS amount_scale,
                      currency, created_at
            "#,
        )
        .bind(new_conversion.click_ref)
        .bind(&new_conversion.affiliate_id)
        .bind(&new_conversion.amount)
        .bind(&new_conversion.currency)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_by_affiliate(&self, affiliate_id: &str) -> Result<Vec<Conversion>, AppError> {
        let rows = sqlx::query_as::<_, ConversionRow>(
            r#"
            SELECT id, click_ref, affiliate_id, amount, scale(amount) AS amount_scale,
                   currency, created_at
            FROM conversions
            WHERE affiliate_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(affiliate_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Conversion::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM conversions")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
