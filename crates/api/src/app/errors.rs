use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use soletrack_auth::PolicyError;
use soletrack_core::DomainError;
use soletrack_store::StoreError;

/// Request-boundary error taxonomy.
///
/// Every failure resolves here into one JSON error response; there are no
/// retries and no partial successes. Credential/token failures are kept
/// generic on purpose (anti-enumeration), and store failures collapse into a
/// 500 whose detail is logged, never returned.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication required")]
    Unauthenticated,

    #[error("forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("email is already registered")]
    DuplicateEmail,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    Validation(String),

    #[error("internal error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Unauthenticated => (StatusCode::UNAUTHORIZED, "unauthenticated"),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "forbidden"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::MissingField(_) => (StatusCode::BAD_REQUEST, "missing_field"),
            ApiError::DuplicateEmail => (StatusCode::BAD_REQUEST, "duplicate_email"),
            ApiError::InvalidCredentials => (StatusCode::BAD_REQUEST, "invalid_credentials"),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            ApiError::Internal(detail) => {
                tracing::error!("internal error: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        json_error(status, code, self.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => ApiError::DuplicateEmail,
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Storage(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<PolicyError> for ApiError {
    fn from(err: PolicyError) -> Self {
        tracing::debug!("brand policy denied request: {err}");
        ApiError::Forbidden
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
