#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;

use affiliate_tracker::api::handlers::health_handler;
use affiliate_tracker::api::routes::tracking_routes;
use affiliate_tracker::domain::entities::{Click, Conversion, NewClick, NewConversion};
use affiliate_tracker::domain::repositories::{ClickRepository, ConversionRepository};
use affiliate_tracker::error::AppError;
use affiliate_tracker::infrastructure::persistence::{
    MemoryStore, PgClickRepository, PgConversionRepository,
};
use affiliate_tracker::state::AppState;

/// State backed by a fresh in-process store. The store is returned so tests
/// can inspect what was persisted.
pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), store.clone());

    (state, store)
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    AppState::new(
        Arc::new(PgClickRepository::new(pool.clone())),
        Arc::new(PgConversionRepository::new(pool)),
    )
}

pub fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .merge(tracking_routes())
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

pub async fn click_count(store: &MemoryStore) -> i64 {
    ClickRepository::count(store).await.unwrap()
}

pub async fn conversion_count(store: &MemoryStore) -> i64 {
    ConversionRepository::count(store).await.unwrap()
}

pub async fn seed_click(
    store: &MemoryStore,
    affiliate_id: &str,
    campaign_id: &str,
    click_id: &str,
) {
    ClickRepository::insert(store, NewClick::new(affiliate_id, campaign_id, click_id))
        .await
        .unwrap();
}

pub async fn insert_pg_click(pool: &PgPool, affiliate_id: &str, click_id: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO clicks (affiliate_id, campaign_id, click_id) VALUES ($1, 'C1', $2) RETURNING id",
    )
    .bind(affiliate_id)
    .bind(click_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Store whose every call fails as if the database were unreachable.
pub struct UnavailableStore;

fn unavailable() -> AppError {
    AppError::store(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ClickRepository for UnavailableStore {
    async fn insert(&self, _new_click: NewClick) -> Result<Click, AppError> {
        Err(unavailable())
    }

    async fn find_owned(
        &self,
        _click_id: &str,
        _affiliate_id: &str,
    ) -> Result<Option<Click>, AppError> {
        Err(unavailable())
    }

    async fn list_by_affiliate(&self, _affiliate_id: &str) -> Result<Vec<Click>, AppError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}

#[async_trait]
impl ConversionRepository for UnavailableStore {
    async fn insert(&self, _new_conversion: NewConversion) -> Result<Conversion, AppError> {
        Err(unavailable())
    }

    async fn list_by_affiliate(&self, _affiliate_id: &str) -> Result<Vec<Conversion>, AppError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }
}

pub fn create_unavailable_state() -> AppState {
    let store = Arc::new(UnavailableStore);
    AppState::new(store.clone(), store)
}
