/**
 * Signup Handler
 *
 * POST /signup
 *
 * # Registration Process
 *
 * 1. Validate the body (done by the `Valid` extractor)
 * 2. Reject an email that is already registered
 * 3. Hash the password with bcrypt
 * 4. Persist the user, filling in the default profile
 * 5. Return the created user without its password hash
 *
 * Signup does not sign the user in; the client follows up with /signin.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::password::hash_password;
use crate::backend::error::{AppError, AppResult};
use crate::backend::extract::Valid;
use crate::backend::server::state::AppState;
use crate::backend::store::models::normalize_email;
use crate::backend::store::NewUser;
use crate::shared::{SignupRequest, UserResponse};

/// Signup handler
///
/// # Arguments
///
/// * `State(state)` - Application state
/// * `Valid(request)` - Signup body: email, password and optional profile
///
/// # Errors
///
/// * `400 Bad Request` - Body fails validation
/// * `409 Conflict` - Email already registered
/// * `500 Internal Server Error` - Hashing or store failure
pub async fn signup(
    State(state): State<AppState>,
    Valid(request): Valid<SignupRequest>,
) -> AppResult<Json<UserResponse>> {
    let email = normalize_email(&request.email);
    tracing::info!("Signup request for: {}", email);

    // The store's unique constraint still covers concurrent signups
    if state.store.find_user_by_email(&email).await?.is_some() {
        tracing::warn!("Email already registered: {}", email);
        return Err(AppError::conflict("This email is already registered"));
    }

    let password_hash = hash_password(request.password, state.config.bcrypt_cost).await?;

    let user = state
        .store
        .create_user(NewUser::with_defaults(
            request.name,
            request.about,
            request.avatar,
            &email,
            password_hash,
        ))
        .await?;

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok(Json(user.into()))
}
