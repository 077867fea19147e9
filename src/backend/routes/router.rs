/**
 * Router Configuration
 *
 * Combines the API routes with the shared middleware:
 * - `CorsLayer::very_permissive()` - any origin, method and header
 * - `TraceLayer` - one span per HTTP request
 *
 * Unknown paths answer with the JSON error body and a 404.
 */

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    // Fallback handler for 404
    let router = router.fallback(|| async { BackendError::not_found("Not Found") });

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(app_state)
}
