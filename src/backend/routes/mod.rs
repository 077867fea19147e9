//! Route Configuration Module
//!
//! - **`router`** - Main router creation, middleware and fallback
//! - **`api_routes`** - `/api/*` endpoints
//!
//! # Routes
//!
//! - `POST /api/auth/register` - create an account
//! - `POST /api/auth/login` - exchange credentials for a token
//! - `GET /api/auth/me` - current user (requires token)
//! - `GET /api/items` - catalog listing
//! - `POST /api/purchase` - buy an item (requires token)
//! - `POST /api/games/{game}` - play `lucky-spin` or `egg-smash` (requires token)

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
