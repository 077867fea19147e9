//! Database test fixtures
//!
//! PostgreSQL tests run against `DATABASE_URL` and are skipped when it is
//! unset. Every fixture uses fresh UUID-based names, so tests can share one
//! database and run in parallel without cleanup.

use coin_arcade::backend::auth::User;
use coin_arcade::backend::catalog::Item;
use coin_arcade::backend::store::PgStore;
use uuid::Uuid;

/// Connect to the test database and run migrations
///
/// Returns `None` when `DATABASE_URL` is not set.
pub async fn create_test_store() -> Option<PgStore> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping PostgreSQL test");
        return None;
    };

    Some(
        PgStore::connect(&database_url, None)
            .await
            .expect("Failed to connect to test database"),
    )
}

/// A user with a unique username and email
pub fn unique_user() -> User {
    let tag = Uuid::new_v4().simple().to_string();
    User::new(
        format!("user_{tag}"),
        format!("{tag}@example.com"),
        "$2b$04$hash".to_string(),
    )
}

/// An item with a unique name
pub fn unique_item(price: i64) -> Item {
    Item::new(
        "Tool",
        format!("Test Item {}", Uuid::new_v4().simple()),
        price,
        "Created by the store tests",
        "https://example.com/item.png",
    )
}
