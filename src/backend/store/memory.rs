/**
 * In-Memory Store
 *
 * Keeps users and items in process memory behind a single `RwLock`. Every
 * operation takes the lock once, so a conditional balance update is checked
 * and applied atomically.
 *
 * Used by the test suite and as the fallback when `DATABASE_URL` is not
 * configured. Data does not survive a restart.
 */

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::catalog::items::Item;
use crate::backend::store::{BalanceUpdate, Store, StoreError, StoreResult};

#[derive(Default)]
struct MemoryState {
    users: Vec<User>,
    items: Vec<Item>,
}

/// In-memory store, cheap to clone
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn insert_user(&self, user: &User) -> StoreResult<()> {
        let mut state = self.state.write().await;
        if state.users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::Duplicate("username".to_string()));
        }
        if state.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate("email".to_string()));
        }
        state.users.push(user.clone());
        Ok(())
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_user_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> StoreResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .iter()
            .find(|u| u.username == username || u.email == email)
            .cloned())
    }

    async fn apply_balance_update(&self, update: BalanceUpdate<'_>) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        let Some(user) = state.users.iter_mut().find(|u| u.id == update.user_id) else {
            return Ok(false);
        };
        if user.coins != update.expected_coins {
            return Ok(false);
        }

        user.coins = update.new_coins;
        if let Some(item_name) = update.acquired_item {
            user.inventory.push(item_name.to_string());
        }
        Ok(true)
    }

    async fn list_items(&self) -> StoreResult<Vec<Item>> {
        Ok(self.state.read().await.items.clone())
    }

    async fn find_item(&self, id: Uuid) -> StoreResult<Option<Item>> {
        let state = self.state.read().await;
        Ok(state.items.iter().find(|item| item.id == id).cloned())
    }

    async fn has_items(&self) -> StoreResult<bool> {
        Ok(!self.state.read().await.items.is_empty())
    }

    async fn insert_item(&self, item: &Item) -> StoreResult<()> {
        let mut state = self.state.write().await;
        if state.items.iter().any(|existing| existing.id == item.id) {
            return Err(StoreError::Duplicate("item id".to_string()));
        }
        state.items.push(item.clone());
        Ok(())
    }
}
