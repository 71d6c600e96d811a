//! Mesto - Main Library
//!
//! Backend for a photo-sharing app: users sign up, sign in with a cookie
//! session, edit their profile, and post picture cards that others can
//! like. Only a card's owner may delete it.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types, ids and validation rules
//!   - Request/response bodies for users and cards
//!   - `ObjectId` identifiers
//!   - Error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and middleware
//!   - Authentication (bcrypt, JWT cookie sessions)
//!   - Postgres or in-memory persistence
//!
//! # Usage
//!
//! ```rust,no_run
//! use mesto::backend::server::{create_app, AppConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await?;
//! // Serve with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation and id parsing
//! - `backend::store::StoreError` for persistence
//! - `backend::error::AppError` for everything that reaches HTTP

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
