//! Common test utilities and helpers
//!
//! - Test application over an in-memory store
//! - Request helpers for authenticated calls
//! - PostgreSQL store fixtures
//! - Custom assertion macros

#[macro_use]
pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
