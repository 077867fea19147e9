//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - `AuthUser` extractor protecting routes that need a session

pub mod auth;

pub use auth::{bearer_token, AuthUser};
