//! Read-only handlers feeding the affiliate dashboard.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::api::dto::clicks::ClickInfo;
use crate::api::dto::conversions::ConversionInfo;
use crate::api::dto::envelope::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every click of an affiliate, newest first.
///
/// # Endpoint
///
/// `GET /dashboard/clicks/{affiliate_id}`
///
/// No pagination: the full history is returned on every call.
pub async fn dashboard_clicks_handler(
    State(state): State<AppState>,
    affiliate_id: Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<Vec<ClickInfo>>>, AppError> {
    let Path(affiliate_id) = affiliate_id?;
    let clicks = state.query_service.list_clicks(&affiliate_id).await?;

    Ok(Json(ApiResponse::data(
        clicks.into_iter().map(ClickInfo::from).collect(),
    )))
}

/// Lists every conversion of an affiliate, newest first.
///
/// # Endpoint
///
/// `GET /dashboard/conversions/{affiliate_id}`
pub async fn dashboard_conversions_handler(
    State(state): State<AppState>,
    affiliate_id: Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<Vec<ConversionInfo>>>, AppError> {
    let Path(affiliate_id) = affiliate_id?;
    let conversions = state.query_service.list_conversions(&affiliate_id).await?;

    Ok(Json(ApiResponse::data(
        conversions.into_iter().map(ConversionInfo::from).collect(),
    )))
}
