/**
 * Auth Service
 *
 * Registration, login and token authentication on top of the store.
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt before storage and never returned
 * - Unknown usernames and wrong passwords produce the same 401 error, and
 *   both pay for one bcrypt verification
 * - Tokens are stateless; a token stays valid until it expires
 */

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::users::User;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::store::{Store, StoreError};

/// A freshly issued token and the account it belongs to
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn Store>,
    sessions: SessionKeys,
    bcrypt_cost: u32,
    /// Hash verified against when the username is unknown
    dummy_hash: Arc<OnceCell<String>>,
}

impl AuthService {
    pub fn new(store: Arc<dyn Store>, sessions: SessionKeys, bcrypt_cost: u32) -> Self {
        Self {
            store,
            sessions,
            bcrypt_cost,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Create an account with the starting balance and log it in
    ///
    /// # Errors
    ///
    /// * `Conflict` - username or email already registered
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> BackendResult<Session> {
        if self
            .store
            .find_user_by_username_or_email(username, email)
            .await?
            .is_some()
        {
            tracing::warn!("Username or email already exists: {} / {}", username, email);
            return Err(BackendError::conflict("Username or email already registered"));
        }

        let password_hash = bcrypt::hash(password, self.bcrypt_cost).map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            BackendError::internal("password hashing failed")
        })?;

        let user = User::new(username.to_string(), email.to_string(), password_hash);
        match self.store.insert_user(&user).await {
            Ok(()) => {}
            Err(StoreError::Duplicate(field)) => {
                tracing::warn!("Registration raced on duplicate {}: {}", field, username);
                return Err(BackendError::conflict("Username or email already registered"));
            }
            Err(e) => return Err(e.into()),
        }

        let token = self.issue_token(&user.username)?;
        tracing::info!("User created successfully: {} ({})", user.username, user.email);

        Ok(Session { token, user })
    }

    /// Verify credentials and issue a new token
    ///
    /// # Errors
    ///
    /// * `Unauthorized` - unknown username or wrong password
    pub async fn login(&self, username: &str, password: &str) -> BackendResult<Session> {
        let Some(user) = self.store.find_user_by_username(username).await? else {
            // same bcrypt work as a wrong password
            let dummy = self.dummy_hash().await?;
            let _ = bcrypt::verify(password, dummy);
            tracing::warn!("User not found: {}", username);
            return Err(BackendError::unauthorized("Invalid credentials"));
        };

        let valid = bcrypt::verify(password, &user.password_hash).map_err(|e| {
            tracing::error!("Password verification error: {:?}", e);
            BackendError::internal("password verification failed")
        })?;

        if !valid {
            tracing::warn!("Invalid password for user: {}", username);
            return Err(BackendError::unauthorized("Invalid credentials"));
        }

        let token = self.issue_token(&user.username)?;
        tracing::info!("User logged in successfully: {}", user.username);

        Ok(Session { token, user })
    }

    /// Resolve a bearer token to the current user record
    ///
    /// # Errors
    ///
    /// * `Unauthorized` - malformed, foreign-signed or expired token, or a
    ///   subject that no longer resolves to a user
    pub async fn authenticate(&self, token: &str) -> BackendResult<User> {
        let claims = self.sessions.verify(token).map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e);
            BackendError::unauthorized("Invalid authentication credentials")
        })?;

        self.store
            .find_user_by_username(&claims.sub)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Token subject not found: {}", claims.sub);
                BackendError::unauthorized("User not found")
            })
    }

    async fn dummy_hash(&self) -> BackendResult<&str> {
        let hash = self
            .dummy_hash
            .get_or_try_init(|| async {
                bcrypt::hash("not-a-real-password", self.bcrypt_cost).map_err(|e| {
                    tracing::error!("Failed to hash password: {:?}", e);
                    BackendError::internal("password hashing failed")
                })
            })
            .await?;
        Ok(hash.as_str())
    }

    fn issue_token(&self, username: &str) -> BackendResult<String> {
        self.sessions.issue(username).map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            BackendError::internal("token signing failed")
        })
    }
}
