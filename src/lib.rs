//! Coin Arcade - Main Library
//!
//! Coin Arcade is a small web-game backend: user accounts holding a virtual
//! currency (coins), a catalog of purchasable items, and two chance-based
//! mini-games that wager coins for a randomized payout.
//!
//! # Module Structure
//!
//! - **`shared`** - Pure game logic
//!   - Weighted payout tables
//!   - Game costs and outcome messages
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP API under `/api`
//!   - Authentication with bcrypt password hashes and JWT sessions
//!   - Catalog seeding and listing
//!   - Coin economy: purchases and game wagers
//!   - PostgreSQL and in-memory stores
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use coin_arcade::backend::server::{config::ServerConfig, init::build_state, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let state = build_state(&config).await?;
//! let app = create_app(state);
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Pure game logic shared by every build
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
