//! Shared Error Types
//!
//! This module defines error types produced by the shared wire types:
//! identifier parsing and request validation. The backend converts them
//! into `AppError::BadRequest` before they reach the client.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field broke one of its rules
//! - `InvalidObjectId` - A path or body identifier is not 24 hex characters
//!
//! # Usage
//!
//! ```rust
//! use mesto::shared::error::SharedError;
//!
//! let error = SharedError::validation("name", "must be between 2 and 30 characters");
//! assert!(error.to_string().contains("name"));
//! ```
use thiserror::Error;

/// Errors raised while parsing or validating client input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Malformed identifier
    #[error("Invalid identifier: '{value}'")]
    InvalidObjectId {
        /// The rejected input
        value: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new identifier error
    pub fn invalid_id(value: impl Into<String>) -> Self {
        Self::InvalidObjectId {
            value: value.into(),
        }
    }
}
