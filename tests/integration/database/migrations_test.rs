//! Migration tests

use coin_arcade::backend::store::{PgStore, Store};

use crate::common::database::create_test_store;

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let Some(store) = create_test_store().await else {
        return;
    };
    let database_url = std::env::var("DATABASE_URL").unwrap();

    // a second connect re-runs the embedded migrations
    let again = PgStore::connect(&database_url, None).await;
    assert!(again.is_ok(), "Migrations should re-run cleanly");

    assert_eq!(store.backend_name(), "postgres");
    assert!(store.list_items().await.is_ok(), "items table should exist");
    assert!(
        store.find_user_by_username("nobody").await.unwrap().is_none(),
        "users table should exist"
    );
}
