/**
 * API Routes
 *
 * Protected endpoints take an `AuthUser` argument, so authentication is
 * enforced per handler rather than by a layer.
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::auth::{get_me, login, register};
use crate::backend::catalog::list_items;
use crate::backend::economy::{play_game, purchase};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// ## Public
/// - `POST /api/auth/register`
/// - `POST /api/auth/login`
/// - `GET /api/items`
///
/// ## Requires `Authorization: Bearer <token>`
/// - `GET /api/auth/me`
/// - `POST /api/purchase`
/// - `POST /api/games/{game}`
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(get_me))
        // Catalog and economy
        .route("/api/items", get(list_items))
        .route("/api/purchase", post(purchase))
        .route("/api/games/{game}", post(play_game))
}
