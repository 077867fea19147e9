//! Server Module
//!
//! Configuration, application state and startup wiring.
//!
//! - **`config`** - `ServerConfig` from environment variables
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`init`** - Store selection, catalog seeding and app creation
//!
//! # Example
//!
//! ```rust,no_run
//! use coin_arcade::backend::server::{config::ServerConfig, init::build_state, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let state = build_state(&config).await?;
//! let app = create_app(state);
//! # Ok(())
//! # }
//! ```

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{build_state, create_app};
pub use state::AppState;
