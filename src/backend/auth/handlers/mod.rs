//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - Signin handler, sets the session cookie
//! └── session.rs  - Logout and session check handlers
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - User registration
//! - **`login`** - POST /signin - User authentication
//! - **`logout`** - GET /logout - Clear the session cookie
//! - **`check_token`** - GET /checktoken - Current user or `false`
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::{get, post}, Router};
//! use mesto::backend::auth::handlers::{check_token, login, logout, signup};
//! use mesto::backend::server::state::AppState;
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/signup", post(signup))
//!     .route("/signin", post(login))
//!     .route("/logout", get(logout))
//!     .route("/checktoken", get(check_token));
//! ```

/// Signup handler
pub mod signup;

/// Signin handler
pub mod login;

/// Logout and session check handlers
pub mod session;

pub use login::login;
pub use session::{check_token, logout};
pub use signup::signup;
