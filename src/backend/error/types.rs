/**
 * Backend Error Types
 *
 * `AppError` is the error taxonomy every handler, extractor and middleware
 * returns. Each variant maps to one HTTP status:
 *
 * | Variant           | Status | Raised when                                   |
 * |-------------------|--------|-----------------------------------------------|
 * | `BadRequest`      | 400    | body/params fail validation, store rejects data |
 * | `Unauthorized`    | 401    | missing/invalid token, wrong credentials      |
 * | `Forbidden`       | 403    | authenticated but not the owner               |
 * | `NotFound`        | 404    | referenced record or route is absent          |
 * | `Conflict`        | 409    | unique email already registered               |
 * | `TooManyRequests` | 429    | rate limit window exhausted                   |
 * | `Internal`        | 500    | anything unclassified                         |
 *
 * The message of `Internal` is only logged; clients always get
 * `SERVER_ERROR_MESSAGE`.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Body message for every 500 response
pub const SERVER_ERROR_MESSAGE: &str = "An error occurred on the server";
/// Body message for missing or invalid session tokens
pub const AUTH_REQUIRED_MESSAGE: &str = "Authorization required";

/// Backend error taxonomy
#[derive(Debug, Error)]
pub enum AppError {
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

    #[error("Too many requests")]
    TooManyRequests,

    /// Unclassified failure; the detail is for logs only
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The uniform 401 used by the auth middleware
    pub fn auth_required() -> Self {
        Self::Unauthorized(AUTH_REQUIRED_MESSAGE.to_string())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message safe to show to clients
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::Conflict(message) => message.clone(),
            Self::TooManyRequests => "Too many requests, please try again later".to_string(),
            Self::Internal(_) => SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { field: "email" } => {
                Self::conflict("This email is already registered")
            }
            StoreError::Duplicate { field } => Self::conflict(format!("Duplicate value for {}", field)),
            StoreError::Invalid(detail) => {
                tracing::warn!("Store rejected data: {}", detail);
                Self::bad_request("Invalid data passed")
            }
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<SharedError> for AppError {
    fn from(err: SharedError) -> Self {
        Self::BadRequest(err.to_string())
    }
}
