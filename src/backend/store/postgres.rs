/**
 * PostgreSQL Store
 *
 * This module implements `Store` on top of a sqlx `PgPool`.
 *
 * # Schema
 *
 * Tables are created by the embedded migrations in `migrations/`, which run
 * every time the store connects:
 * - `users` - unique `username` and `email`, `inventory` as `TEXT[]`
 * - `items` - `position BIGSERIAL` keeps insertion order for listing
 *
 * # Balance Writes
 *
 * The conditional balance update is a single `UPDATE ... WHERE coins = $n`
 * statement. Inventory grows through `array_append`, so the new item is
 * appended to whatever the row holds at write time.
 */

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::catalog::items::Item;
use crate::backend::store::{BalanceUpdate, Store, StoreError, StoreResult};

const USER_COLUMNS: &str = "id, username, email, password_hash, coins, inventory, created_at";
const ITEM_COLUMNS: &str = "id, item_type, item_name, coin_price, description, image_url";

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to `database_url`, optionally overriding the database name,
    /// and run migrations.
    pub async fn connect(database_url: &str, database_name: Option<&str>) -> StoreResult<Self> {
        let mut options = PgConnectOptions::from_str(database_url)?;
        if let Some(name) = database_name {
            options = options.database(name);
        }

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await?;

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self { pool })
    }
}

/// Map unique-constraint violations to `StoreError::Duplicate`
fn map_insert_error(error: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            let constraint = db_error.constraint().unwrap_or("unique field").to_string();
            return StoreError::Duplicate(constraint);
        }
    }
    StoreError::Database(error)
}

#[async_trait]
impl Store for PgStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn insert_user(&self, user: &User) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, coins, inventory, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.coins)
        .bind(&user.inventory)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(())
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1 OR email = $2 LIMIT 1"
        ))
        .bind(username)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn apply_balance_update(&self, update: BalanceUpdate<'_>) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET coins = $1,
                inventory = CASE
                    WHEN $2::TEXT IS NULL THEN inventory
                    ELSE array_append(inventory, $2::TEXT)
                END
            WHERE id = $3 AND coins = $4
            "#,
        )
        .bind(update.new_coins)
        .bind(update.acquired_item)
        .bind(update.user_id)
        .bind(update.expected_coins)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn list_items(&self) -> StoreResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items ORDER BY position"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn find_item(&self, id: Uuid) -> StoreResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn has_items(&self) -> StoreResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM items)")
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn insert_item(&self, item: &Item) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO items (id, item_type, item_name, coin_price, description, image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(item.id)
        .bind(&item.item_type)
        .bind(&item.item_name)
        .bind(item.coin_price)
        .bind(&item.description)
        .bind(&item.image_url)
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(())
    }

    async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
    }
}
