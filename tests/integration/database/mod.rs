//! PostgreSQL store tests
//!
//! Skipped unless `DATABASE_URL` points at a reachable database.

mod migrations_test;
mod store_test;
