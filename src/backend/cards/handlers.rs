/**
 * Card Handlers
 *
 * Listing, creation, owner-only deletion and like toggling. Every route
 * requires an `Identity`; a card's owner and likers are always taken from
 * it, never from the request body.
 */

use axum::{extract::State, response::Json};

use crate::backend::error::{AppError, AppResult};
use crate::backend::extract::{PathId, Valid};
use crate::backend::middleware::Identity;
use crate::backend::store::{NewCard, Store};
use crate::shared::{CardResponse, CreateCardRequest};

const CARD_NOT_FOUND: &str = "Card not found";

/// GET /cards
pub async fn list_cards(State(store): State<Store>) -> AppResult<Json<Vec<CardResponse>>> {
    let cards = store.list_cards().await?;
    Ok(Json(cards.into_iter().map(CardResponse::from).collect()))
}

/// POST /cards
pub async fn create_card(
    State(store): State<Store>,
    identity: Identity,
    Valid(request): Valid<CreateCardRequest>,
) -> AppResult<Json<CardResponse>> {
    let card = store
        .create_card(NewCard {
            name: request.name,
            link: request.link,
            owner: identity.0,
        })
        .await?;

    tracing::info!("Card {} created by {}", card.id, card.owner);
    Ok(Json(card.into()))
}

/// DELETE /cards/{cardId}
///
/// Ownership is checked before anything is removed, so a 403 leaves the
/// card in place.
///
/// # Errors
///
/// * `400 Bad Request` - Malformed card id
/// * `403 Forbidden` - Caller does not own the card
/// * `404 Not Found` - No such card
pub async fn delete_card(
    State(store): State<Store>,
    identity: Identity,
    PathId(card_id): PathId,
) -> AppResult<Json<CardResponse>> {
    let card = store
        .find_card(&card_id)
        .await?
        .ok_or_else(|| AppError::not_found(CARD_NOT_FOUND))?;

    if &card.owner != identity.id() {
        tracing::warn!("User {} tried to delete card {} owned by {}", identity.id(), card.id, card.owner);
        return Err(AppError::forbidden("You cannot delete another user's card"));
    }

    // Lost a race with another delete of the same card
    if !store.delete_card(&card_id).await? {
        return Err(AppError::not_found(CARD_NOT_FOUND));
    }

    tracing::info!("Card {} deleted by {}", card.id, identity.id());
    Ok(Json(card.into()))
}

/// PUT /cards/{cardId}/likes
pub async fn like_card(
    State(store): State<Store>,
    identity: Identity,
    PathId(card_id): PathId,
) -> AppResult<Json<CardResponse>> {
    let card = store
        .add_like(&card_id, identity.id())
        .await?
        .ok_or_else(|| AppError::not_found(CARD_NOT_FOUND))?;
    Ok(Json(card.into()))
}

/// DELETE /cards/{cardId}/likes
pub async fn unlike_card(
    State(store): State<Store>,
    identity: Identity,
    PathId(card_id): PathId,
) -> AppResult<Json<CardResponse>> {
    let card = store
        .remove_like(&card_id, identity.id())
        .await?
        .ok_or_else(|| AppError::not_found(CARD_NOT_FOUND))?;
    Ok(Json(card.into()))
}
