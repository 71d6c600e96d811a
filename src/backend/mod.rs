//! Backend Module
//!
//! All server-side code: an Axum HTTP API for users and picture cards,
//! with cookie-based JWT sessions.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route configuration and the middleware stack
//! - **`auth`** - Passwords, tokens, session cookie, auth handlers
//! - **`users`** - Profile handlers and `users` queries
//! - **`cards`** - Card handlers and `cards`/`card_likes` queries
//! - **`store`** - Persistence behind one `Store` handle (Postgres or memory)
//! - **`middleware`** - Authentication, rate limiting, security headers
//! - **`extract`** - Validating body and path extractors
//! - **`error`** - `AppError` and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Config, state, init
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── users/          - User handlers and queries
//! ├── cards/          - Card handlers and queries
//! ├── store/          - Store handle, models, in-memory backend
//! ├── middleware/     - Request middleware
//! ├── extract.rs      - Extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` is built once in `server::init` and cloned into every
//! handler. It holds the configuration, the store, the token keys and the
//! rate limiter; there is no other global state.
//!
//! # Error Handling
//!
//! Handlers return `AppResult<T>`. Store and validation errors convert
//! into `AppError` with `?`, and every error renders as
//! `{ "message": ... }` with its status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and sessions
pub mod auth;

/// User profiles
pub mod users;

/// Picture cards
pub mod cards;

/// Persistence
pub mod store;

/// Middleware for request processing
pub mod middleware;

/// Request extractors
pub mod extract;

pub use error::{AppError, AppResult};
pub use server::create_app;
