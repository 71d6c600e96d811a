/**
 * Stored Records
 *
 * The records both store backends read and write. `User` keeps the
 * password hash; conversion into `UserResponse` drops it.
 */
use chrono::{DateTime, Utc};

use crate::shared::{CardResponse, ObjectId, UserResponse};

/// Profile name given to users who sign up without one
pub const DEFAULT_NAME: &str = "Jacques-Yves Cousteau";
/// Profile text given to users who sign up without one
pub const DEFAULT_ABOUT: &str = "Explorer";
/// Avatar given to users who sign up without one
pub const DEFAULT_AVATAR: &str =
    "https://pictures.s3.yandex.net/resources/jacques-cousteau_1604399756.png";

/// User record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: ObjectId,
    pub name: String,
    pub about: String,
    pub avatar: String,
    /// Unique, stored trimmed and lowercased
    pub email: String,
    /// bcrypt hash, never serialized
    pub password_hash: String,
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub about: String,
    pub avatar: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Build a new user, filling in the default profile for missing fields
    pub fn with_defaults(
        name: Option<String>,
        about: Option<String>,
        avatar: Option<String>,
        email: &str,
        password_hash: String,
    ) -> Self {
        Self {
            name: name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            about: about.unwrap_or_else(|| DEFAULT_ABOUT.to_string()),
            avatar: avatar.unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            email: normalize_email(email),
            password_hash,
        }
    }
}

/// Emails are compared trimmed and lowercased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Card record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: ObjectId,
    pub name: String,
    pub link: String,
    pub owner: ObjectId,
    /// Likers in insertion order, without duplicates
    pub likes: Vec<ObjectId>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a card
#[derive(Debug, Clone)]
pub struct NewCard {
    pub name: String,
    pub link: String,
    pub owner: ObjectId,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            about: user.about,
            avatar: user.avatar,
            email: user.email,
        }
    }
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            name: card.name,
            link: card.link,
            owner: card.owner,
            likes: card.likes,
            created_at: card.created_at,
        }
    }
}
