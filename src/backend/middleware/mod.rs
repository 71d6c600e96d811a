//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - session cookie verification and the `Identity` extractor
//! - **`rate_limit`** - fixed-window request limiting per client
//! - **`security_headers`** - response hardening headers
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use mesto::backend::middleware::require_auth;
//! use mesto::backend::server::state::AppState;
//!
//! fn protect(router: Router<AppState>, state: AppState) -> Router<AppState> {
//!     router.route_layer(from_fn_with_state(state, require_auth))
//! }
//! ```

pub mod auth;
pub mod rate_limit;
pub mod security_headers;

pub use auth::{require_auth, Identity};
pub use rate_limit::{rate_limit, RateLimiter};
pub use security_headers::security_headers;
