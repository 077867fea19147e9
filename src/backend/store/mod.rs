//! Store Module
//!
//! Persistence for user accounts and catalog items. Services never talk to a
//! database directly; they hold an `Arc<dyn Store>` constructed at startup and
//! injected through `AppState`.
//!
//! # Implementations
//!
//! - **`postgres`** - `PgStore`, PostgreSQL through sqlx (production)
//! - **`memory`** - `MemoryStore`, an in-process store used by tests and as
//!   the fallback when no database is configured
//!
//! # Balance Writes
//!
//! Balance changes are conditional: `apply_balance_update` only writes when
//! the stored balance still equals the balance the caller read. A request
//! that lost a race gets `false` back and nothing is written, so two
//! concurrent transactions on one account can never silently overwrite each
//! other.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::catalog::items::Item;

/// In-memory store
pub mod memory;

/// PostgreSQL store
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique field (username, email, item id) is already taken
    #[error("duplicate value for {0}")]
    Duplicate(String),

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A conditional balance change for one user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceUpdate<'a> {
    pub user_id: Uuid,
    /// Balance the caller read; the write only lands if it still holds
    pub expected_coins: i64,
    pub new_coins: i64,
    /// Item name appended to the inventory together with the balance
    pub acquired_item: Option<&'a str>,
}

/// Persistence interface for users and the catalog
#[async_trait]
pub trait Store: Send + Sync {
    /// Short name for logs
    fn backend_name(&self) -> &'static str;

    /// Insert a new user, failing with `Duplicate` on a taken username or email
    async fn insert_user(&self, user: &User) -> StoreResult<()>;

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Find a user holding either the username or the email
    async fn find_user_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> StoreResult<Option<User>>;

    /// Apply a balance change if the stored balance still equals
    /// `expected_coins`. Returns whether the write happened.
    async fn apply_balance_update(&self, update: BalanceUpdate<'_>) -> StoreResult<bool>;

    /// All items in insertion order
    async fn list_items(&self) -> StoreResult<Vec<Item>>;

    async fn find_item(&self, id: Uuid) -> StoreResult<Option<Item>>;

    async fn has_items(&self) -> StoreResult<bool>;

    async fn insert_item(&self, item: &Item) -> StoreResult<()>;

    /// Release connections held by the store
    async fn close(&self) {}
}
