//! HTTP-facing errors for the employee API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::db::StoreError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Operation that failed, used to pick the generic 500 message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Error fetching employees",
            Operation::Get => "Error fetching employee",
            Operation::Create => "Error creating employee",
            Operation::Update => "Error updating employee",
            Operation::Delete => "Error deleting employee",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    // 4xx
    #[error("Employee not found")]
    NotFound,

    #[error("Email already exists")]
    DuplicateEmail,

    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid employee id")]
    InvalidId,

    #[error("Invalid request body")]
    InvalidBody,

    // 5xx
    #[error("{}", .0.failure_message())]
    Internal(Operation),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::DuplicateEmail
            | ApiError::MissingFields
            | ApiError::InvalidId
            | ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Maps a classified store failure for `op`. Unclassified failures are logged here
    /// and reduced to the opaque 500 for that operation.
    pub fn from_store(op: Operation, err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::UniqueViolation => ApiError::DuplicateEmail,
            StoreError::RequiredFieldMissing => ApiError::MissingFields,
            StoreError::Other(e) => {
                tracing::error!(error = %e, operation = ?op, "store failure");
                ApiError::Internal(op)
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
