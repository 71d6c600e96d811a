/**
 * Signin Handler
 *
 * POST /signin
 *
 * # Authentication Process
 *
 * 1. Look up the user by (normalized) email
 * 2. Verify the password with bcrypt
 * 3. Issue a JWT and set it as the `jwt` cookie
 * 4. Return the user
 *
 * Unknown email and wrong password produce the same 401 so responses do
 * not reveal which addresses are registered.
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::CookieJar;

use crate::backend::auth::cookie::session_cookie;
use crate::backend::auth::password::verify_password;
use crate::backend::error::{AppError, AppResult};
use crate::backend::extract::Valid;
use crate::backend::server::state::AppState;
use crate::backend::store::models::normalize_email;
use crate::shared::{SigninRequest, UserResponse};

const BAD_CREDENTIALS: &str = "Incorrect email or password";

/// Signin handler
///
/// # Returns
///
/// The cookie jar carrying the new session cookie and the signed-in user
///
/// # Errors
///
/// * `400 Bad Request` - Body fails validation
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Store, hashing or signing failure
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Valid(request): Valid<SigninRequest>,
) -> AppResult<(CookieJar, Json<UserResponse>)> {
    let email = normalize_email(&request.email);
    tracing::info!("Signin request for: {}", email);

    let user = state.store.find_user_by_email(&email).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", email);
        AppError::unauthorized(BAD_CREDENTIALS)
    })?;

    if !verify_password(request.password, user.password_hash.clone()).await? {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(AppError::unauthorized(BAD_CREDENTIALS));
    }

    let token = state.tokens.issue(&user.id).map_err(|e| {
        AppError::internal(format!("Failed to create token: {}", e))
    })?;
    let cookie = session_cookie(token, state.tokens.ttl(), state.config.production);

    tracing::info!("User signed in successfully: {} ({})", user.id, user.email);

    Ok((jar.add(cookie), Json(user.into())))
}
