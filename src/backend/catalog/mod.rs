//! Catalog Module
//!
//! The fixed list of purchasable items. The catalog is seeded once at
//! startup when empty and is read-only afterwards.
//!
//! - **`items`** - Item record and seed list
//! - **`service`** - Listing and seeding
//! - **`handlers`** - `GET /api/items`

pub mod items;

pub mod service;

pub mod handlers;

pub use handlers::list_items;
pub use items::{seed_items, Item};
pub use service::CatalogService;
