/**
 * User Database Operations
 *
 * Postgres queries for the `users` table. Rows are read into a private
 * `UserRow` and converted into `store::User`, so a malformed id in the
 * table surfaces as `StoreError::Corrupt` instead of a panic.
 */
use sqlx::PgPool;

use crate::backend::store::{NewUser, StoreError, StoreResult, User};
use crate::shared::ObjectId;

const USER_COLUMNS: &str = "id, name, about, avatar, email, password_hash";

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    about: String,
    avatar: String,
    email: String,
    password_hash: String,
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: ObjectId::parse(&row.id).map_err(|e| StoreError::Corrupt(e.to_string()))?,
            name: row.name,
            about: row.about,
            avatar: row.avatar,
            email: row.email,
            password_hash: row.password_hash,
        })
    }
}

fn into_user(row: Option<UserRow>) -> StoreResult<Option<User>> {
    row.map(User::try_from).transpose()
}

/// List all users in creation order
///
/// `created_at` defaults to `clock_timestamp()`, so users created in the
/// same second still come back in signup order.
pub async fn list_users(pool: &PgPool) -> StoreResult<Vec<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at, id");
    let rows = sqlx::query_as::<_, UserRow>(&sql).fetch_all(pool).await?;

    rows.into_iter().map(User::try_from).collect()
}

/// Get user by ID
pub async fn get_user_by_id(pool: &PgPool, id: &ObjectId) -> StoreResult<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
    let row = sqlx::query_as::<_, UserRow>(&sql)
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

    into_user(row)
}

/// Get user by (normalized) email
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> StoreResult<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
    let row = sqlx::query_as::<_, UserRow>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;

    into_user(row)
}

/// Create a new user
///
/// # Errors
///
/// * `StoreError::Duplicate` - the email is already registered
/// * `StoreError::Invalid` - a column check failed (e.g. name length)
pub async fn create_user(pool: &PgPool, new_user: NewUser) -> StoreResult<User> {
    let id = ObjectId::generate();
    let sql = format!(
        "INSERT INTO users (id, name, about, avatar, email, password_hash) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING {USER_COLUMNS}"
    );

    let row = sqlx::query_as::<_, UserRow>(&sql)
        .bind(id.as_str())
        .bind(&new_user.name)
        .bind(&new_user.about)
        .bind(&new_user.avatar)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(pool)
        .await?;

    User::try_from(row)
}

/// Update name and about; `None` if the user does not exist
pub async fn update_profile(
    pool: &PgPool,
    id: &ObjectId,
    name: &str,
    about: &str,
) -> StoreResult<Option<User>> {
    let sql = format!(
        "UPDATE users SET name = $1, about = $2 WHERE id = $3 RETURNING {USER_COLUMNS}"
    );
    let row = sqlx::query_as::<_, UserRow>(&sql)
        .bind(name)
        .bind(about)
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

    into_user(row)
}

/// Update avatar; `None` if the user does not exist
pub async fn update_avatar(pool: &PgPool, id: &ObjectId, avatar: &str) -> StoreResult<Option<User>> {
    let sql = format!("UPDATE users SET avatar = $1 WHERE id = $2 RETURNING {USER_COLUMNS}");
    let row = sqlx::query_as::<_, UserRow>(&sql)
        .bind(avatar)
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

    into_user(row)
}
