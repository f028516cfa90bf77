//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_derivation::DerivationError;
use domain_events::EventError;
use domain_ledger::LedgerError;
use domain_receivable::ReceivableError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone())
            }
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::AccountNotFound(_) | LedgerError::EntryNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            LedgerError::DuplicateAccountCode(_)
            | LedgerError::AccountInUse(_)
            | LedgerError::CategoryLocked(_) => ApiError::Conflict(err.to_string()),
            LedgerError::NonPositiveAmount(_) => ApiError::Validation(err.to_string()),
        }
    }
}

impl From<EventError> for ApiError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::Validation(_) => ApiError::Validation(err.to_string()),
            EventError::DuplicateResi(_)
            | EventError::DuplicateManifest { .. }
            | EventError::DuplicatePayrollPeriod { .. } => ApiError::Conflict(err.to_string()),
            EventError::NotFound(_) => ApiError::NotFound(err.to_string()),
        }
    }
}

impl From<ReceivableError> for ApiError {
    fn from(err: ReceivableError) -> Self {
        match err {
            ReceivableError::Validation(_) => ApiError::Validation(err.to_string()),
            ReceivableError::InvoiceNotFound | ReceivableError::ShipmentNotFound => {
                ApiError::NotFound(err.to_string())
            }
            ReceivableError::AlreadyBilled { .. } | ReceivableError::NotAMember { .. } => {
                ApiError::Conflict(err.to_string())
            }
            ReceivableError::NumberExhausted => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<DerivationError> for ApiError {
    fn from(err: DerivationError) -> Self {
        match err {
            DerivationError::Ledger(inner) => inner.into(),
        }
    }
}
