/**
 * Application State Management
 *
 * `AppState` holds the store and the three services built on it. The
 * `FromRef` implementations let handlers extract only the service they use:
 *
 * ```rust,ignore
 * async fn handler(State(economy): State<EconomyService>) { /* ... */ }
 * ```
 *
 * Every service shares the same `Arc<dyn Store>`, so cloning the state per
 * request is cheap.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::catalog::service::CatalogService;
use crate::backend::economy::service::EconomyService;
use crate::backend::store::Store;

#[derive(Clone)]
pub struct AppState {
    /// Shared persistence handle, also closed on shutdown
    pub store: Arc<dyn Store>,
    pub auth: AuthService,
    pub catalog: CatalogService,
    pub economy: EconomyService,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, sessions: SessionKeys, bcrypt_cost: u32) -> Self {
        Self {
            auth: AuthService::new(store.clone(), sessions, bcrypt_cost),
            catalog: CatalogService::new(store.clone()),
            economy: EconomyService::new(store.clone()),
            store,
        }
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl FromRef<AppState> for CatalogService {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}

impl FromRef<AppState> for EconomyService {
    fn from_ref(state: &AppState) -> Self {
        state.economy.clone()
    }
}
