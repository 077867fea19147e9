/**
 * Catalog Handlers
 *
 * `GET /api/items` - public listing of every purchasable item.
 */

use axum::{extract::State, response::Json};

use crate::backend::catalog::items::Item;
use crate::backend::catalog::service::CatalogService;
use crate::backend::error::BackendResult;

/// List items handler
pub async fn list_items(State(catalog): State<CatalogService>) -> BackendResult<Json<Vec<Item>>> {
    let items = catalog.list_items().await?;
    tracing::debug!("Listing {} catalog items", items.len());
    Ok(Json(items))
}
