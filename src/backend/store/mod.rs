//! Storage Layer
//!
//! This module hides where users and cards live. `Store` is an enum over
//! two backends with the same behavior:
//!
//! - **`Postgres`** - `sqlx` pool; queries live in `users::db` and `cards::db`
//! - **`Memory`** - process-local maps behind a `tokio::sync::RwLock`, used
//!   when `DATABASE_URL` is unset and by the test suite
//!
//! Every operation returns `StoreError`, a closed set of failure kinds the
//! controllers pattern-match on (duplicate key, invalid data, backend
//! failure) instead of inspecting driver errors.
//!
//! # Atomicity
//!
//! Each mutation is a single-record operation. Likes are set semantics:
//! adding an existing liker or removing an absent one is a no-op.

/// Stored records and their defaults
pub mod models;

/// In-memory backend
pub mod memory;

use sqlx::PgPool;
use thiserror::Error;

use crate::backend::cards::db as card_db;
use crate::backend::users::db as user_db;
use crate::shared::ObjectId;

pub use memory::MemoryStore;
pub use models::{Card, NewCard, NewUser, User};

/// Storage failure kinds
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique field already holds this value
    #[error("duplicate value for unique field '{field}'")]
    Duplicate {
        /// Name of the unique field
        field: &'static str,
    },

    /// The record breaks a schema rule (length, reference, format)
    #[error("invalid data: {0}")]
    Invalid(String),

    /// A stored row could not be turned back into a record
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// Any other driver failure
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return StoreError::Duplicate { field: "email" };
            }
            if db.is_check_violation() || db.is_foreign_key_violation() {
                return StoreError::Invalid(db.message().to_string());
            }
        }
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Handle to whichever backend the server was configured with
#[derive(Clone)]
pub enum Store {
    Postgres(PgPool),
    Memory(MemoryStore),
}

impl Store {
    /// Empty in-memory store
    pub fn memory() -> Self {
        Store::Memory(MemoryStore::default())
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Store::Postgres(_) => "postgres",
            Store::Memory(_) => "memory",
        }
    }

    // Users

    pub async fn list_users(&self) -> StoreResult<Vec<User>> {
        match self {
            Store::Postgres(pool) => user_db::list_users(pool).await,
            Store::Memory(mem) => Ok(mem.list_users().await),
        }
    }

    pub async fn find_user(&self, id: &ObjectId) -> StoreResult<Option<User>> {
        match self {
            Store::Postgres(pool) => user_db::get_user_by_id(pool, id).await,
            Store::Memory(mem) => Ok(mem.find_user(id).await),
        }
    }

    /// Look up by email; the caller passes the normalized form
    pub async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        match self {
            Store::Postgres(pool) => user_db::get_user_by_email(pool, email).await,
            Store::Memory(mem) => Ok(mem.find_user_by_email(email).await),
        }
    }

    pub async fn create_user(&self, new_user: NewUser) -> StoreResult<User> {
        match self {
            Store::Postgres(pool) => user_db::create_user(pool, new_user).await,
            Store::Memory(mem) => mem.create_user(new_user).await,
        }
    }

    /// Returns `None` when no user has this id
    pub async fn update_profile(
        &self,
        id: &ObjectId,
        name: &str,
        about: &str,
    ) -> StoreResult<Option<User>> {
        match self {
            Store::Postgres(pool) => user_db::update_profile(pool, id, name, about).await,
            Store::Memory(mem) => mem.update_profile(id, name, about).await,
        }
    }

    pub async fn update_avatar(&self, id: &ObjectId, avatar: &str) -> StoreResult<Option<User>> {
        match self {
            Store::Postgres(pool) => user_db::update_avatar(pool, id, avatar).await,
            Store::Memory(mem) => mem.update_avatar(id, avatar).await,
        }
    }

    // Cards

    /// All cards, oldest first
    pub async fn list_cards(&self) -> StoreResult<Vec<Card>> {
        match self {
            Store::Postgres(pool) => card_db::list_cards(pool).await,
            Store::Memory(mem) => Ok(mem.list_cards().await),
        }
    }

    pub async fn find_card(&self, id: &ObjectId) -> StoreResult<Option<Card>> {
        match self {
            Store::Postgres(pool) => card_db::get_card(pool, id).await,
            Store::Memory(mem) => Ok(mem.find_card(id).await),
        }
    }

    pub async fn create_card(&self, new_card: NewCard) -> StoreResult<Card> {
        match self {
            Store::Postgres(pool) => card_db::create_card(pool, new_card).await,
            Store::Memory(mem) => mem.create_card(new_card).await,
        }
    }

    /// Returns whether a card was removed
    pub async fn delete_card(&self, id: &ObjectId) -> StoreResult<bool> {
        match self {
            Store::Postgres(pool) => card_db::delete_card(pool, id).await,
            Store::Memory(mem) => Ok(mem.delete_card(id).await),
        }
    }

    /// Set-add `user` to the card's likes; `None` if the card is missing
    pub async fn add_like(&self, card: &ObjectId, user: &ObjectId) -> StoreResult<Option<Card>> {
        match self {
            Store::Postgres(pool) => card_db::add_like(pool, card, user).await,
            Store::Memory(mem) => mem.add_like(card, user).await,
        }
    }

    /// Set-remove `user` from the card's likes; `None` if the card is missing
    pub async fn remove_like(
        &self,
        card: &ObjectId,
        user: &ObjectId,
    ) -> StoreResult<Option<Card>> {
        match self {
            Store::Postgres(pool) => card_db::remove_like(pool, card, user).await,
            Store::Memory(mem) => Ok(mem.remove_like(card, user).await),
        }
    }
}
