/**
 * Server Configuration
 *
 * This module loads `ServerConfig` from environment variables.
 *
 * # Variables
 *
 * - `JWT_SECRET` (required) - token signing secret
 * - `DATABASE_URL` - PostgreSQL connection string; unset means in-memory store
 * - `DB_NAME` - database name overriding the one in `DATABASE_URL`
 * - `TOKEN_TTL_MINUTES` - session validity window (default 30)
 * - `BCRYPT_COST` - password hashing work factor (default `bcrypt::DEFAULT_COST`)
 * - `SERVER_PORT` - listen port (default 3000)
 *
 * # Error Handling
 *
 * A missing secret or an unparsable value stops startup with a `ConfigError`.
 * An unreachable database does not; see `init::load_store`.
 */

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use thiserror::Error;

pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingValue(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Clone)]
pub struct ServerConfig {
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    pub port: u16,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("database_name", &self.database_name)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("port", &self.port)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jwt_secret = non_empty("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let ttl_minutes: i64 = parse_or(&non_empty, "TOKEN_TTL_MINUTES", DEFAULT_TOKEN_TTL_MINUTES)?;
        if ttl_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_MINUTES",
                value: ttl_minutes.to_string(),
            });
        }

        let bcrypt_cost: u32 = parse_or(&non_empty, "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        Ok(Self {
            database_url: non_empty("DATABASE_URL"),
            database_name: non_empty("DB_NAME"),
            jwt_secret,
            token_ttl: Duration::minutes(ttl_minutes),
            bcrypt_cost,
            port: parse_or(&non_empty, "SERVER_PORT", DEFAULT_PORT)?,
        })
    }
}

fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
