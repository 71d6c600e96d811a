/**
 * In-Memory Store
 *
 * Process-local backend with the same rules the Postgres schema enforces:
 * unique emails, 2-30 character text fields, card owners and likers must
 * be existing users, and likes behave as an insertion-ordered set.
 *
 * Data is lost on restart. Each operation takes the lock once, so every
 * mutation is atomic with respect to other requests.
 */
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use super::models::{Card, NewCard, NewUser, User};
use super::{StoreError, StoreResult};
use crate::shared::validation;
use crate::shared::ObjectId;

#[derive(Default)]
struct MemoryState {
    users: Vec<User>,
    cards: Vec<Card>,
}

impl MemoryState {
    fn user_exists(&self, id: &ObjectId) -> bool {
        self.users.iter().any(|u| &u.id == id)
    }

    fn user_mut(&mut self, id: &ObjectId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| &u.id == id)
    }

    fn card_mut(&mut self, id: &ObjectId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| &c.id == id)
    }
}

/// Shared handle to the in-memory maps
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

fn check_text(field: &str, value: &str) -> StoreResult<()> {
    validation::text(field, value).map_err(|e| StoreError::Invalid(e.to_string()))
}

impl MemoryStore {
    pub async fn list_users(&self) -> Vec<User> {
        self.state.read().await.users.clone()
    }

    pub async fn find_user(&self, id: &ObjectId) -> Option<User> {
        let state = self.state.read().await;
        state.users.iter().find(|u| &u.id == id).cloned()
    }

    pub async fn find_user_by_email(&self, email: &str) -> Option<User> {
        let state = self.state.read().await;
        state.users.iter().find(|u| u.email == email).cloned()
    }

    pub async fn create_user(&self, new_user: NewUser) -> StoreResult<User> {
        check_text("name", &new_user.name)?;
        check_text("about", &new_user.about)?;

        let mut state = self.state.write().await;
        if state.users.iter().any(|u| u.email == new_user.email) {
            return Err(StoreError::Duplicate { field: "email" });
        }

        let user = User {
            id: ObjectId::generate(),
            name: new_user.name,
            about: new_user.about,
            avatar: new_user.avatar,
            email: new_user.email,
            password_hash: new_user.password_hash,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    pub async fn update_profile(
        &self,
        id: &ObjectId,
        name: &str,
        about: &str,
    ) -> StoreResult<Option<User>> {
        check_text("name", name)?;
        check_text("about", about)?;

        let mut state = self.state.write().await;
        Ok(state.user_mut(id).map(|user| {
            user.name = name.to_string();
            user.about = about.to_string();
            user.clone()
        }))
    }

    pub async fn update_avatar(&self, id: &ObjectId, avatar: &str) -> StoreResult<Option<User>> {
        let mut state = self.state.write().await;
        Ok(state.user_mut(id).map(|user| {
            user.avatar = avatar.to_string();
            user.clone()
        }))
    }

    pub async fn list_cards(&self) -> Vec<Card> {
        self.state.read().await.cards.clone()
    }

    pub async fn find_card(&self, id: &ObjectId) -> Option<Card> {
        let state = self.state.read().await;
        state.cards.iter().find(|c| &c.id == id).cloned()
    }

    pub async fn create_card(&self, new_card: NewCard) -> StoreResult<Card> {
        check_text("name", &new_card.name)?;

        let mut state = self.state.write().await;
        if !state.user_exists(&new_card.owner) {
            return Err(StoreError::Invalid(format!(
                "owner {} does not exist",
                new_card.owner
            )));
        }

        let card = Card {
            id: ObjectId::generate(),
            name: new_card.name,
            link: new_card.link,
            owner: new_card.owner,
            likes: Vec::new(),
            created_at: Utc::now(),
        };
        state.cards.push(card.clone());
        Ok(card)
    }

    pub async fn delete_card(&self, id: &ObjectId) -> bool {
        let mut state = self.state.write().await;
        let before = state.cards.len();
        state.cards.retain(|c| &c.id != id);
        state.cards.len() != before
    }

    pub async fn add_like(&self, card: &ObjectId, user: &ObjectId) -> StoreResult<Option<Card>> {
        let mut state = self.state.write().await;
        if !state.user_exists(user) {
            return Err(StoreError::Invalid(format!("user {} does not exist", user)));
        }

        Ok(state.card_mut(card).map(|card| {
            if !card.likes.contains(user) {
                card.likes.push(user.clone());
            }
            card.clone()
        }))
    }

    pub async fn remove_like(&self, card: &ObjectId, user: &ObjectId) -> Option<Card> {
        let mut state = self.state.write().await;
        state.card_mut(card).map(|card| {
            card.likes.retain(|liker| liker != user);
            card.clone()
        })
    }
}
