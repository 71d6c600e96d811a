/**
 * Public Routes
 *
 * - `POST /signup` - User registration
 * - `POST /signin` - Signin, sets the `jwt` cookie
 * - `GET /logout` - Clears the `jwt` cookie
 * - `GET /checktoken` - Current user or `false`
 * - `GET /health` - Liveness probe
 */

use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use crate::backend::auth::{check_token, login, logout, signup};
use crate::backend::server::state::AppState;

/// Configure the routes reachable without a session
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/signup", post(signup))
        .route("/signin", post(login))
        .route("/logout", get(logout))
        .route("/checktoken", get(check_token))
        .route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
