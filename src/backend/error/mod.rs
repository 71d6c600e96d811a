//! Backend Error Module
//!
//! This module defines the error taxonomy used by every HTTP handler and
//! middleware, and its conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - AppError and its status/message mapping
//! └── conversion.rs - IntoResponse and extractor rejection conversions
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use mesto::backend::error::{AppError, AppResult};
//!
//! fn find(found: bool) -> AppResult<&'static str> {
//!     if found { Ok("card") } else { Err(AppError::not_found("Card not found")) }
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{AppError, AUTH_REQUIRED_MESSAGE, SERVER_ERROR_MESSAGE};

/// Result alias for handlers
pub type AppResult<T> = Result<T, AppError>;
