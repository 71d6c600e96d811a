/**
 * User Handlers
 *
 * All routes here sit behind `require_auth`, so an `Identity` is always
 * present. Responses never include the password hash.
 */

use axum::{extract::State, response::Json};

use crate::backend::error::{AppError, AppResult};
use crate::backend::extract::{PathId, Valid};
use crate::backend::middleware::Identity;
use crate::backend::store::Store;
use crate::shared::{UpdateAvatarRequest, UpdateProfileRequest, UserResponse};

const USER_NOT_FOUND: &str = "User not found";

/// GET /users
pub async fn list_users(State(store): State<Store>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = store.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/me
///
/// A valid token for a user that no longer exists yields 404.
pub async fn get_me(State(store): State<Store>, identity: Identity) -> AppResult<Json<UserResponse>> {
    let user = store
        .find_user(identity.id())
        .await?
        .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;
    Ok(Json(user.into()))
}

/// GET /users/{userId}
pub async fn get_user(
    State(store): State<Store>,
    PathId(user_id): PathId,
) -> AppResult<Json<UserResponse>> {
    let user = store.find_user(&user_id).await?.ok_or_else(|| {
        tracing::debug!("User lookup miss: {}", user_id);
        AppError::not_found(USER_NOT_FOUND)
    })?;
    Ok(Json(user.into()))
}

/// PATCH /users/me
pub async fn update_profile(
    State(store): State<Store>,
    identity: Identity,
    Valid(request): Valid<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = store
        .update_profile(identity.id(), &request.name, &request.about)
        .await?
        .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

    tracing::info!("Profile updated for user: {}", user.id);
    Ok(Json(user.into()))
}

/// PATCH /users/me/avatar
pub async fn update_avatar(
    State(store): State<Store>,
    identity: Identity,
    Valid(request): Valid<UpdateAvatarRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = store
        .update_avatar(identity.id(), &request.avatar)
        .await?
        .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

    tracing::info!("Avatar updated for user: {}", user.id);
    Ok(Json(user.into()))
}
