//! Server Module
//!
//! Server setup: configuration loading, application state and router
//! assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs      - Module exports and documentation
//! ├── config.rs   - AppConfig, environment loading, store connection
//! ├── state.rs    - AppState
//! └── init.rs     - create_app
//! ```

/// Configuration and store connection
pub mod config;

/// Application state
pub mod state;

/// Server initialization
pub mod init;

pub use config::{AppConfig, ConfigError};
pub use init::create_app;
pub use state::AppState;
