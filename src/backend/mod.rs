//! Backend Module
//!
//! All server-side code: the Axum HTTP server, persistence, authentication
//! and the coin economy. Only compiled with the `ssr` feature.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Registration, login, JWT sessions
//! - **`middleware`** - Bearer token extractor
//! - **`catalog`** - Purchasable items and seeding
//! - **`economy`** - Purchases and mini-game plays
//! - **`store`** - `Store` trait with PostgreSQL and in-memory implementations
//! - **`error`** - `BackendError` and its HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request extractors
//! ├── catalog/        - Item catalog
//! ├── economy/        - Purchases and games
//! ├── store/          - Persistence
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds one `Arc<dyn Store>` shared by the auth, catalog and
//! economy services. Handlers extract the service they need through
//! `FromRef`.
//!
//! # Concurrency
//!
//! Every balance change is written conditionally on the balance the request
//! read when it authenticated. Two concurrent requests against one account
//! cannot both succeed from the same snapshot; the loser gets
//! `409 Conflict` and nothing is written for it.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Request extractors
pub mod middleware;

/// Persistence
pub mod store;

/// Item catalog
pub mod catalog;

/// Purchases and mini-games
pub mod economy;

pub use error::BackendError;
pub use server::create_app;
