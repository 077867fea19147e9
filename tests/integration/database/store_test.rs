//! `PgStore` behaviour: unique constraints, the conditional balance write
//! and catalog ordering.

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use coin_arcade::backend::auth::User;
use coin_arcade::backend::store::{BalanceUpdate, PgStore, Store, StoreError};

use crate::common::database::{create_test_store, unique_item, unique_user};

async fn stored_user(store: &PgStore) -> User {
    let user = unique_user();
    store.insert_user(&user).await.unwrap();
    user
}

async fn reload(store: &PgStore, user: &User) -> User {
    store
        .find_user_by_username(&user.username)
        .await
        .unwrap()
        .expect("user should exist")
}

#[tokio::test]
async fn test_insert_and_find_user() {
    let Some(store) = create_test_store().await else {
        return;
    };
    let user = stored_user(&store).await;

    let found = reload(&store, &user).await;
    assert_eq!(found.id, user.id);
    assert_eq!(found.coins, 1000);
    assert!(found.inventory.is_empty());

    let by_email = store
        .find_user_by_username_or_email("someone-else", &user.email)
        .await
        .unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(user.id));
}

#[tokio::test]
async fn test_duplicate_username_or_email_is_rejected() {
    let Some(store) = create_test_store().await else {
        return;
    };
    let user = stored_user(&store).await;

    let mut same_name = unique_user();
    same_name.username = user.username.clone();
    assert_matches!(
        store.insert_user(&same_name).await,
        Err(StoreError::Duplicate(_))
    );

    let mut same_email = unique_user();
    same_email.email = user.email.clone();
    assert_matches!(
        store.insert_user(&same_email).await,
        Err(StoreError::Duplicate(_))
    );

    assert!(store
        .find_user_by_username(&same_email.username)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_stale_balance_writes_nothing() {
    let Some(store) = create_test_store().await else {
        return;
    };
    let user = stored_user(&store).await;

    let applied = store
        .apply_balance_update(BalanceUpdate {
            user_id: user.id,
            expected_coins: 999,
            new_coins: 0,
            acquired_item: Some("Steel Sword"),
        })
        .await
        .unwrap();

    assert!(!applied);
    let stored = reload(&store, &user).await;
    assert_eq!(stored.coins, 1000);
    assert!(stored.inventory.is_empty());
}

#[tokio::test]
async fn test_matching_balance_sets_coins_and_appends_once() {
    let Some(store) = create_test_store().await else {
        return;
    };
    let user = stored_user(&store).await;

    let applied = store
        .apply_balance_update(BalanceUpdate {
            user_id: user.id,
            expected_coins: 1000,
            new_coins: 850,
            acquired_item: Some("Steel Sword"),
        })
        .await
        .unwrap();
    assert!(applied);

    let applied = store
        .apply_balance_update(BalanceUpdate {
            user_id: user.id,
            expected_coins: 850,
            new_coins: 700,
            acquired_item: Some("Steel Sword"),
        })
        .await
        .unwrap();
    assert!(applied);

    let stored = reload(&store, &user).await;
    assert_eq!(stored.coins, 700);
    assert_eq!(stored.inventory, vec!["Steel Sword", "Steel Sword"]);
}

#[tokio::test]
async fn test_balance_only_update_keeps_inventory() {
    let Some(store) = create_test_store().await else {
        return;
    };
    let user = stored_user(&store).await;
    store
        .apply_balance_update(BalanceUpdate {
            user_id: user.id,
            expected_coins: 1000,
            new_coins: 925,
            acquired_item: Some("Pickaxe"),
        })
        .await
        .unwrap();

    let applied = store
        .apply_balance_update(BalanceUpdate {
            user_id: user.id,
            expected_coins: 925,
            new_coins: 1075,
            acquired_item: None,
        })
        .await
        .unwrap();

    assert!(applied);
    let stored = reload(&store, &user).await;
    assert_eq!(stored.coins, 1075);
    assert_eq!(stored.inventory, vec!["Pickaxe"]);
}

#[tokio::test]
async fn test_items_listed_in_insertion_order() {
    let Some(store) = create_test_store().await else {
        return;
    };
    let inserted = vec![unique_item(300), unique_item(10), unique_item(150)];
    for item in &inserted {
        store.insert_item(item).await.unwrap();
    }

    let listed: Vec<_> = store
        .list_items()
        .await
        .unwrap()
        .into_iter()
        .filter(|item| inserted.iter().any(|i| i.id == item.id))
        .collect();
    assert_eq!(listed, inserted);

    assert!(store.has_items().await.unwrap());
    let found = store.find_item(inserted[1].id).await.unwrap();
    assert_eq!(found.as_ref(), Some(&inserted[1]));

    assert_matches!(
        store.insert_item(&inserted[0]).await,
        Err(StoreError::Duplicate(_))
    );
}
