/**
 * User Model
 *
 * This module defines the persisted user record. Reads and writes go
 * through the `Store` trait; this file only knows the record's shape and how
 * a fresh account starts out.
 */

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Coins credited to every new account
pub const STARTING_COINS: i64 = 1000;

/// User struct representing a user in the store
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique)
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Coin balance
    pub coins: i64,
    /// Names of purchased items, in purchase order, duplicates allowed
    pub inventory: Vec<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a new account with the starting balance and an empty inventory
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            coins: STARTING_COINS,
            inventory: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether the balance covers `cost`
    pub fn can_afford(&self, cost: i64) -> bool {
        self.coins >= cost
    }
}
