//! API error types with structured JSON responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::core_state::CoreError;
use crate::intake::IntakeError;
use crate::reporting;
use crate::search::SearchError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Empty search input")]
    EmptyInput,
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Duplicate patient ID: {0}")]
    DuplicateId(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::EmptyInput => (
                StatusCode::BAD_REQUEST,
                "EMPTY_INPUT",
                reporting::search_error_message(&SearchError::EmptyInput).to_string(),
            ),
            ApiError::Validation(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION",
                detail.clone(),
            ),
            ApiError::DuplicateId(detail) => {
                (StatusCode::CONFLICT, "DUPLICATE_ID", detail.clone())
            }
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LockPoisoned => ApiError::Internal("lock poisoned".into()),
            CoreError::Search(SearchError::EmptyInput) => ApiError::EmptyInput,
            CoreError::Intake(e) => ApiError::from(e),
            CoreError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<IntakeError> for ApiError {
    fn from(err: IntakeError) -> Self {
        let message = reporting::intake_error_message(&err);
        match err {
            IntakeError::Validation { .. } | IntakeError::AgeOutOfRange(_) => {
                ApiError::Validation(message)
            }
            IntakeError::DuplicateId(_) => ApiError::DuplicateId(message),
            IntakeError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
