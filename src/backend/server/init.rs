/**
 * Server Initialization
 *
 * # Initialization Process
 *
 * 1. Open the store: PostgreSQL when `DATABASE_URL` is set, otherwise the
 *    in-memory store
 * 2. Build `AppState` with session keys from the config
 * 3. Seed the catalog if it is empty
 * 4. Create the router
 *
 * Without `DATABASE_URL` data lives only as long as the process. A
 * configured database that cannot be opened aborts startup.
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::BackendResult;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryStore, PgStore, Store};

/// Open the configured store
///
/// # Errors
///
/// * `Store` - `DATABASE_URL` is set but the database cannot be opened or
///   migrated
pub async fn load_store(config: &ServerConfig) -> BackendResult<Arc<dyn Store>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using in-memory store; data will not persist.");
        return Ok(Arc::new(MemoryStore::new()));
    };

    tracing::info!("Connecting to database...");
    let store = PgStore::connect(database_url, config.database_name.as_deref())
        .await
        .map_err(|e| {
            tracing::error!("Failed to open database: {:?}", e);
            e
        })?;
    tracing::info!("Database connection pool created successfully");

    Ok(Arc::new(store))
}

/// Open the store, build the services and seed the catalog
pub async fn build_state(config: &ServerConfig) -> BackendResult<AppState> {
    let store = load_store(config).await?;
    tracing::info!("Using {} store", store.backend_name());

    let sessions = SessionKeys::new(config.jwt_secret.as_bytes(), config.token_ttl);
    let state = AppState::new(store, sessions, config.bcrypt_cost);

    state.catalog.ensure_seeded().await?;
    Ok(state)
}

/// Create the Axum application for `state`
pub fn create_app(state: AppState) -> Router<()> {
    tracing::info!("Initializing coin arcade backend");
    create_router(state)
}
