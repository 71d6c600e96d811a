//! Users Module
//!
//! Profile reads and updates for signed-in callers.
//!
//! - **`db`** - Postgres queries for the `users` table
//! - **`handlers`** - `/users` HTTP handlers

pub mod db;
pub mod handlers;

pub use handlers::{get_me, get_user, list_users, update_avatar, update_profile};
