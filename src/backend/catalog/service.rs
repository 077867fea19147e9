//! Catalog service: listing and startup seeding.

use std::sync::Arc;

use crate::backend::catalog::items::{seed_items, Item};
use crate::backend::error::BackendResult;
use crate::backend::store::Store;

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn Store>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// All items in insertion order
    pub async fn list_items(&self) -> BackendResult<Vec<Item>> {
        Ok(self.store.list_items().await?)
    }

    /// Insert the seed catalog if no item exists yet.
    ///
    /// Returns the number of items inserted. The emptiness check and the
    /// inserts are separate store calls, so two processes seeding at once
    /// may both insert.
    pub async fn ensure_seeded(&self) -> BackendResult<usize> {
        if self.store.has_items().await? {
            tracing::info!("Catalog already populated, skipping seed");
            return Ok(0);
        }

        let items = seed_items();
        for item in &items {
            self.store.insert_item(item).await?;
        }

        tracing::info!("Seeded catalog with {} items", items.len());
        Ok(items.len())
    }
}
