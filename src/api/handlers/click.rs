//! Handler for click tracking.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::clicks::{ClickInfo, ClickParams};
use crate::api::dto::envelope::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Records a click from an affiliate tracking link.
///
/// # Endpoint
///
/// `GET /click?affiliate_id=..&campaign_id=..&click_id=..`
///
/// # Response
///
/// ```json
/// {
///   "status": "success",
///   "message": "Click tracked successfully.",
///   "data": { "id": 1, "affiliate_id": "A1", "campaign_id": "C1", "click_id": "X1", "created_at": "..." }
/// }
/// ```
///
/// # Errors
///
/// - 400 if a parameter is missing or empty
/// - 409 if `click_id` was already recorded (by any affiliate)
/// - 500 on store failure
pub async fn click_handler(
    State(state): State<AppState>,
    params: Result<Query<ClickParams>, QueryRejection>,
) -> Result<Json<ApiResponse<ClickInfo>>, AppError> {
    let Query(params) = params?;
    params.validate()?;

    let click = state
        .click_service
        .record_click(params.into())
        .await
        .map_err(|e| e.with_public_message("Failed to track click."))?;

    Ok(Json(ApiResponse::success(
        "Click tracked successfully.",
        ClickInfo::from(click),
    )))
}
