/**
 * Card Wire Types
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::object_id::ObjectId;
use crate::shared::validation::{self, Validate};

/// `POST /cards` body
///
/// The owner is never taken from the body; it is always the caller.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreateCardRequest {
    pub name: String,
    pub link: String,
}

impl Validate for CreateCardRequest {
    fn validate(&self) -> Result<(), SharedError> {
        validation::text("name", &self.name)?;
        validation::link("link", &self.link)
    }
}

/// Card as returned to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardResponse {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub link: String,
    pub owner: ObjectId,
    /// Likers in the order they liked the card
    pub likes: Vec<ObjectId>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
