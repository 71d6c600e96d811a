/**
 * Protected API Routes
 *
 * # Routes
 *
 * ## Users
 * - `GET /users` - All users
 * - `GET /users/me` - The caller
 * - `PATCH /users/me` - Update name and about
 * - `PATCH /users/me/avatar` - Update avatar
 * - `GET /users/{userId}` - One user
 *
 * ## Cards
 * - `GET /cards` - All cards, oldest first
 * - `POST /cards` - Create a card owned by the caller
 * - `DELETE /cards/{cardId}` - Delete one of the caller's cards
 * - `PUT /cards/{cardId}/likes` - Like
 * - `DELETE /cards/{cardId}/likes` - Unlike
 */

use axum::{
    routing::{delete, get, patch, put},
    Router,
};

use crate::backend::cards::{create_card, delete_card, like_card, list_cards, unlike_card};
use crate::backend::server::state::AppState;
use crate::backend::users::{get_me, get_user, list_users, update_avatar, update_profile};

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with the user and card routes configured. The caller is
/// responsible for layering `require_auth` over them.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Users
        .route("/users", get(list_users))
        // Static segment wins over `{userId}`
        .route("/users/me", get(get_me).patch(update_profile))
        .route("/users/me/avatar", patch(update_avatar))
        .route("/users/{userId}", get(get_user))
        // Cards
        .route("/cards", get(list_cards).post(create_card))
        .route("/cards/{cardId}", delete(delete_card))
        .route("/cards/{cardId}/likes", put(like_card).delete(unlike_card))
}
