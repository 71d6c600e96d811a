//! Request Validation Rules
//!
//! Field-level rules shared by every inbound payload, plus the `Validate`
//! trait the backend's `Valid` extractor calls before a handler runs.
//!
//! # Rules
//!
//! - Profile text (`name`, `about`, card `name`): 2 to 30 characters
//! - Links (`avatar`, card `link`): optional `http://`/`https://`, a dotted
//!   host, and an optional path of word characters, dots, dashes and slashes
//! - Email: `local@domain.tld` without whitespace
//! - Password: present and non-empty

use std::sync::LazyLock;

use regex::Regex;

use crate::shared::error::SharedError;

/// Minimum length of profile and card text fields
pub const TEXT_MIN: usize = 2;
/// Maximum length of profile and card text fields
pub const TEXT_MAX: usize = 30;

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w.-]*)*/?$")
        .expect("link pattern is valid")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Implemented by every request body accepted through the `Valid` extractor
pub trait Validate {
    fn validate(&self) -> Result<(), SharedError>;
}

/// Check a profile or card text field
pub fn text(field: &str, value: &str) -> Result<(), SharedError> {
    let len = value.chars().count();
    if (TEXT_MIN..=TEXT_MAX).contains(&len) {
        Ok(())
    } else {
        Err(SharedError::validation(
            field,
            format!("must be between {} and {} characters", TEXT_MIN, TEXT_MAX),
        ))
    }
}

/// Check an avatar or image link
pub fn link(field: &str, value: &str) -> Result<(), SharedError> {
    if LINK_RE.is_match(value) {
        Ok(())
    } else {
        Err(SharedError::validation(field, "must be a valid URL"))
    }
}

pub fn email(value: &str) -> Result<(), SharedError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(SharedError::validation("email", "must be a valid email"))
    }
}

pub fn password(value: &str) -> Result<(), SharedError> {
    if value.is_empty() {
        Err(SharedError::validation("password", "is required"))
    } else {
        Ok(())
    }
}

/// Run `check` on an optional field only when it is present
pub fn optional<F>(value: Option<&str>, check: F) -> Result<(), SharedError>
where
    F: FnOnce(&str) -> Result<(), SharedError>,
{
    value.map_or(Ok(()), check)
}
