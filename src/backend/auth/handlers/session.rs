/**
 * Session Handlers
 *
 * GET /logout     - clear the session cookie
 * GET /checktoken - report who the session cookie belongs to
 *
 * Both are public. Logout is stateless: the token itself stays valid
 * until it expires, only the browser's copy is dropped.
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::CookieJar;
use serde_json::{json, Value};

use crate::backend::auth::cookie::removal_cookie;
use crate::backend::auth::sessions::TOKEN_COOKIE;
use crate::backend::error::AppResult;
use crate::backend::server::state::AppState;
use crate::shared::UserResponse;

/// Logout handler
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Value>) {
    tracing::debug!("Clearing session cookie");
    (
        jar.add(removal_cookie(state.config.production)),
        Json(json!({ "message": "Signed out" })),
    )
}

/// Session check handler
///
/// # Returns
///
/// The current user when the cookie holds a valid token for an existing
/// user, otherwise the JSON literal `false`. Never 401.
///
/// # Errors
///
/// * `500 Internal Server Error` - Store failure
pub async fn check_token(State(state): State<AppState>, jar: CookieJar) -> AppResult<Json<Value>> {
    let Some(cookie) = jar.get(TOKEN_COOKIE) else {
        return Ok(Json(Value::Bool(false)));
    };

    let user_id = match state.tokens.verify(cookie.value()) {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!("Session check with rejected token: {}", e);
            return Ok(Json(Value::Bool(false)));
        }
    };

    match state.store.find_user(&user_id).await? {
        Some(user) => Ok(Json(json!(UserResponse::from(user)))),
        None => {
            tracing::warn!("Session token for unknown user: {}", user_id);
            Ok(Json(Value::Bool(false)))
        }
    }
}
