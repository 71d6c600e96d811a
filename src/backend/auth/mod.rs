//! Authentication Module
//!
//! This module handles registration, signin and session management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - bcrypt hashing on the blocking pool
//! ├── sessions.rs     - JWT issue and verification
//! ├── cookie.rs       - Session cookie construction
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password → user created → user returned
//! 2. **Signin**: credentials verified → JWT set as the `jwt` cookie
//! 3. **Protected routes**: cookie verified by `middleware::auth`
//! 4. **Logout**: cookie cleared
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are only ever sent in an `HttpOnly` cookie
//! - Tokens expire after the configured lifetime (7 days by default)
//! - Invalid credentials return 401 (no information leakage)

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Session cookie construction
pub mod cookie;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{check_token, login, logout, signup};
pub use sessions::{TokenKeys, TOKEN_COOKIE};
