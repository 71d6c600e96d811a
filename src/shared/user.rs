/**
 * User Wire Types
 *
 * Request and response bodies for the signup, signin and profile
 * endpoints. Request types reject unknown fields and implement
 * `Validate`; the response type never carries the password hash.
 */
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::object_id::ObjectId;
use crate::shared::validation::{self, Validate};

/// Sign up request
///
/// Only `email` and `password` are required; the profile fields fall back
/// to the defaults in `backend::store::models`.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub about: Option<String>,
    pub avatar: Option<String>,
    pub email: String,
    /// Plain text; hashed before it reaches the store
    pub password: String,
}

impl Validate for SignupRequest {
    fn validate(&self) -> Result<(), SharedError> {
        validation::optional(self.name.as_deref(), |v| validation::text("name", v))?;
        validation::optional(self.about.as_deref(), |v| validation::text("about", v))?;
        validation::optional(self.avatar.as_deref(), |v| validation::link("avatar", v))?;
        validation::email(self.email.trim())?;
        validation::password(&self.password)
    }
}

/// Sign in request
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

impl Validate for SigninRequest {
    fn validate(&self) -> Result<(), SharedError> {
        validation::email(self.email.trim())?;
        validation::password(&self.password)
    }
}

/// `PATCH /users/me` body; both fields are required
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub about: String,
}

impl Validate for UpdateProfileRequest {
    fn validate(&self) -> Result<(), SharedError> {
        validation::text("name", &self.name)?;
        validation::text("about", &self.about)
    }
}

/// `PATCH /users/me/avatar` body
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct UpdateAvatarRequest {
    pub avatar: String,
}

impl Validate for UpdateAvatarRequest {
    fn validate(&self) -> Result<(), SharedError> {
        validation::link("avatar", &self.avatar)
    }
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub about: String,
    pub avatar: String,
    pub email: String,
}
