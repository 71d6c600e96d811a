/**
 * Card Database Operations
 *
 * Postgres queries for `cards` and `card_likes`. Likes are stored one row
 * per (card, user) pair, so the primary key makes liking idempotent and
 * `ON DELETE CASCADE` drops them with their card. Reads aggregate the
 * likers back into an array ordered by when they liked the card.
 */
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::backend::store::{Card, NewCard, StoreError, StoreResult};
use crate::shared::ObjectId;

const CARD_SELECT: &str = r#"
    SELECT c.id, c.name, c.link, c.owner_id, c.created_at,
           COALESCE(
               ARRAY_AGG(l.user_id ORDER BY l.liked_at, l.user_id)
                   FILTER (WHERE l.user_id IS NOT NULL),
               ARRAY[]::TEXT[]
           ) AS likes
    FROM cards c
    LEFT JOIN card_likes l ON l.card_id = c.id
"#;

#[derive(Debug, sqlx::FromRow)]
struct CardRow {
    id: String,
    name: String,
    link: String,
    owner_id: String,
    created_at: DateTime<Utc>,
    likes: Vec<String>,
}

fn parse_id(raw: &str) -> StoreResult<ObjectId> {
    ObjectId::parse(raw).map_err(|e| StoreError::Corrupt(e.to_string()))
}

impl TryFrom<CardRow> for Card {
    type Error = StoreError;

    fn try_from(row: CardRow) -> Result<Self, Self::Error> {
        Ok(Card {
            id: parse_id(&row.id)?,
            name: row.name,
            link: row.link,
            owner: parse_id(&row.owner_id)?,
            likes: row
                .likes
                .iter()
                .map(|liker| parse_id(liker))
                .collect::<StoreResult<Vec<_>>>()?,
            created_at: row.created_at,
        })
    }
}

/// List all cards, oldest first
pub async fn list_cards(pool: &PgPool) -> StoreResult<Vec<Card>> {
    let sql = format!("{CARD_SELECT} GROUP BY c.id ORDER BY c.created_at, c.id");
    let rows = sqlx::query_as::<_, CardRow>(&sql).fetch_all(pool).await?;

    rows.into_iter().map(Card::try_from).collect()
}

/// Get card by ID
pub async fn get_card(pool: &PgPool, id: &ObjectId) -> StoreResult<Option<Card>> {
    let sql = format!("{CARD_SELECT} WHERE c.id = $1 GROUP BY c.id");
    let row = sqlx::query_as::<_, CardRow>(&sql)
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

    row.map(Card::try_from).transpose()
}

/// Create a new card with no likes
///
/// # Errors
///
/// `StoreError::Invalid` if the owner does not exist or the name breaks
/// the length check.
pub async fn create_card(pool: &PgPool, new_card: NewCard) -> StoreResult<Card> {
    let id = ObjectId::generate();

    let (created_at,): (DateTime<Utc>,) = sqlx::query_as(
        r#"
        INSERT INTO cards (id, name, link, owner_id, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING created_at
        "#,
    )
    .bind(id.as_str())
    .bind(&new_card.name)
    .bind(&new_card.link)
    .bind(new_card.owner.as_str())
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(Card {
        id,
        name: new_card.name,
        link: new_card.link,
        owner: new_card.owner,
        likes: Vec::new(),
        created_at,
    })
}

/// Delete a card and its likes; returns whether a row was removed
pub async fn delete_card(pool: &PgPool, id: &ObjectId) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM cards WHERE id = $1")
        .bind(id.as_str())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Add `user` to the card's likes unless already present
pub async fn add_like(pool: &PgPool, card: &ObjectId, user: &ObjectId) -> StoreResult<Option<Card>> {
    sqlx::query(
        r#"
        INSERT INTO card_likes (card_id, user_id)
        SELECT id, $2 FROM cards WHERE id = $1
        ON CONFLICT (card_id, user_id) DO NOTHING
        "#,
    )
    .bind(card.as_str())
    .bind(user.as_str())
    .execute(pool)
    .await?;

    get_card(pool, card).await
}

/// Remove `user` from the card's likes if present
pub async fn remove_like(
    pool: &PgPool,
    card: &ObjectId,
    user: &ObjectId,
) -> StoreResult<Option<Card>> {
    sqlx::query("DELETE FROM card_likes WHERE card_id = $1 AND user_id = $2")
        .bind(card.as_str())
        .bind(user.as_str())
        .execute(pool)
        .await?;

    get_card(pool, card).await
}
