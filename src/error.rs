//! Application error taxonomy and its HTTP mapping.
//!
//! Every failure a request can hit falls into one of four variants. Each maps
//! to exactly one status code and is rendered as the standard JSON envelope
//! (`{ "status": "error", "message": ... }`). Nothing is retried internally.

use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::envelope::ApiResponse;
use crate::application::services::MISSING_PARAMETERS;
use crate::utils::db_error::is_unique_violation_on_click_id;

/// Generic message returned for store failures when no operation-specific
/// message was attached.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed input. Raised before the store is touched.
    #[error("{0}")]
    InvalidRequest(String),

    /// The store rejected a click because its `click_id` already exists.
    #[error("Duplicate click ID.")]
    DuplicateClick,

    /// A postback referenced a click that is absent or owned by another affiliate.
    #[error("Invalid click_id for affiliate_id. Postback ignored.")]
    UnknownClick,

    /// Connectivity or query failure. Detail is logged, never returned.
    #[error("store error: {source}")]
    Store {
        #[source]
        source: sqlx::Error,
        public_message: &'static str,
    },
}

impl AppError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn store(source: sqlx::Error) -> Self {
        Self::Store {
            source,
            public_message: INTERNAL_ERROR_MESSAGE,
        }
    }

    /// Replaces the caller-facing message of a [`AppError::Store`] error.
    ///
    /// Other variants already carry a precise message and are returned unchanged.
    pub fn with_public_message(self, message: &'static str) -> Self {
        match self {
            Self::Store { source, .. } => Self::Store {
                source,
                public_message: message,
            },
            other => other,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateClick => StatusCode::CONFLICT,
            Self::UnknownClick => StatusCode::NOT_FOUND,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand back to the caller.
    pub fn public_message(&self) -> String {
        match self {
            Self::Store { public_message, .. } => (*public_message).to_string(),
            other => other.to_string(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_click_id(&e) {
            return Self::DuplicateClick;
        }

        Self::store(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(_: validator::ValidationErrors) -> Self {
        Self::invalid_request(MISSING_PARAMETERS)
    }
}

/// A query string that cannot be deserialized (a repeated key, for example)
/// is reported like any other unusable input.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Query string rejected");
        Self::invalid_request(MISSING_PARAMETERS)
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Path parameter rejected");
        Self::invalid_request(MISSING_PARAMETERS)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Store { source, .. } = &self {
            tracing::error!(error = %source, "Store operation failed");
        }

        let status = self.status_code();
        let body = ApiResponse::<()>::error(self.public_message());

        (status, Json(body)).into_response()
    }
}
