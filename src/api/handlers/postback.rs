//! Handler for advertiser postbacks.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::conversions::{ConversionInfo, PostbackParams};
use crate::api::dto::envelope::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Attributes a conversion to a previously tracked click.
///
/// # Endpoint
///
/// `GET /postback?affiliate_id=..&click_id=..&amount=..&currency=..`
///
/// # Attribution
///
/// The click must exist **and** belong to `affiliate_id`. Repeating a postback
/// records another conversion; there is no deduplication.
///
/// # Errors
///
/// - 400 if a parameter is missing or `amount` is not a number
/// - 404 if no click with this `click_id` belongs to the affiliate
/// - 500 on store failure
pub async fn postback_handler(
    State(state): State<AppState>,
    params: Result<Query<PostbackParams>, QueryRejection>,
) -> Result<Json<ApiResponse<ConversionInfo>>, AppError> {
    let Query(params) = params?;
    params.validate()?;

    let conversion = state
        .postback_service
        .record_conversion(params.into())
        .await
        .map_err(|e| e.with_public_message("Failed to process postback."))?;

    Ok(Json(ApiResponse::success(
        "Conversion tracked",
        ConversionInfo::from(conversion),
    )))
}
