//! Cards Module
//!
//! - **`db`** - Postgres queries for `cards` and `card_likes`
//! - **`handlers`** - `/cards` HTTP handlers

pub mod db;
pub mod handlers;

pub use handlers::{create_card, delete_card, like_card, list_cards, unlike_card};
