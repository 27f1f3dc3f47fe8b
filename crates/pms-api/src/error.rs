//! HTTP error type; every failure leaves as `{success: false, message}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use pms_core::error::DomainError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, msg)
            }
            ApiError::Forbidden(msg) => {
                tracing::warn!("Forbidden: {}", msg);
                (StatusCode::FORBIDDEN, msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            ApiError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, msg)
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorBody {
            success: false,
            message,
        });

        (status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();
        match err {
            DomainError::PropertyNotFound
            | DomainError::FloorNotFound
            | DomainError::UnitNotFound
            | DomainError::TenantNotFound
            | DomainError::RentRecordNotFound
            | DomainError::AccountNotFound
            | DomainError::LaborNotFound => ApiError::NotFound(message),

            DomainError::UnitNotAvailable
            | DomainError::TenantCodeAlreadyExists
            | DomainError::RentMonthAlreadyExists(_)
            | DomainError::UnitNumberAlreadyExists(_)
            | DomainError::EmailAlreadyExists(_)
            | DomainError::IdProofAlreadyExists(_) => ApiError::Conflict(message),

            DomainError::ValidationError(_)
            | DomainError::TenantWithoutUnit
            | DomainError::ReceiptNotEligible
            | DomainError::InvalidResetToken => ApiError::BadRequest(message),

            DomainError::InvalidCredentials => ApiError::Unauthorized(message),

            DomainError::PasswordHashError(_)
            | DomainError::TokenGenerationError(_)
            | DomainError::MailError(_)
            | DomainError::DatabaseError(_)
            | DomainError::InternalError(_) => ApiError::InternalError(message),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_status_mapping() {
        let cases: [(ApiError, StatusCode); 6] = [
            (DomainError::UnitNotFound.into(), StatusCode::NOT_FOUND),
            (DomainError::UnitNotAvailable.into(), StatusCode::CONFLICT),
            (
                DomainError::RentMonthAlreadyExists("2024-01".into()).into(),
                StatusCode::CONFLICT,
            ),
            (
                DomainError::ReceiptNotEligible.into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::InvalidCredentials.into(),
                StatusCode::UNAUTHORIZED,
            ),
            (
                DomainError::DatabaseError("boom".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
