use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::services::{Rejection, SubmitError};
use crate::store::StoreError;
use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Submission rejected")]
    InvalidSubmission(Rejection),

    #[error("Database error")]
    DatabaseError(#[from] StoreError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidSubmission(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) | AppError::InvalidSubmission(_) => "VALIDATION_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::ValidationError(msg) => {
                warn!(code = self.code(), message = %msg, "Request failed");
            }
            AppError::InvalidSubmission(rejection) => {
                warn!(
                    fields = ?rejection.errors.fields().collect::<Vec<_>>(),
                    "Submission failed validation"
                );
            }
            AppError::DatabaseError(e) => {
                error!(error = ?e, "Database error");
            }
        }
    }
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Invalid(rejection) => AppError::InvalidSubmission(rejection),
            SubmitError::Store(e) => AppError::DatabaseError(e),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        // Store failures never leak their cause to the client
        let (public_message, details) = match self {
            AppError::ValidationError(msg) => (msg, None),
            AppError::InvalidSubmission(rejection) => (
                "The given data was invalid.".to_string(),
                Some(json!({
                    "errors": rejection.errors,
                    "old": rejection.old,
                })),
            ),
            AppError::DatabaseError(_) => ("A database error occurred".to_string(), None),
        };

        error_response(code, public_message, details, status)
    }
}
