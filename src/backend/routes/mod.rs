//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and middleware stack
//! ├── auth_routes.rs  - Public routes (signup, signin, logout, checktoken, health)
//! └── api_routes.rs   - Protected user and card routes
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use mesto::backend::routes::create_router;
//! use mesto::backend::server::{config::AppConfig, state::AppState};
//! use mesto::backend::store::Store;
//!
//! let config = AppConfig::builder().build().unwrap();
//! let router = create_router(AppState::new(config, Store::memory()));
//! ```

/// Main router creation
pub mod router;

/// Public routes
pub mod auth_routes;

/// Protected API routes
pub mod api_routes;

pub use router::create_router;
