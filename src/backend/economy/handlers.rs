/**
 * Economy Handlers
 *
 * - `POST /api/purchase` - buy one catalog item
 * - `POST /api/games/{game}` - play `lucky-spin` or `egg-smash`
 *
 * Both require a bearer token. The balance checked is the one loaded by the
 * `AuthUser` extractor for this request.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::backend::economy::service::EconomyService;
use crate::backend::economy::types::{GameResultResponse, PurchaseRequest, PurchaseResponse};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::AuthUser;
use crate::shared::games::Game;

/// Purchase handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid token
/// * `404 Not Found` - unknown item id
/// * `400 Bad Request` - insufficient coins
/// * `409 Conflict` - balance changed by a concurrent request
///
/// # Example Request
///
/// ```http
/// POST /api/purchase HTTP/1.1
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// { "item_id": "6f1c..." }
/// ```
pub async fn purchase(
    State(economy): State<EconomyService>,
    AuthUser(user): AuthUser,
    Json(request): Json<PurchaseRequest>,
) -> BackendResult<Json<PurchaseResponse>> {
    tracing::info!("Purchase request from {} for item {}", user.username, request.item_id);

    let receipt = economy.purchase(&user, &request.item_id).await?;
    Ok(Json(receipt.into()))
}

/// Play game handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid token
/// * `404 Not Found` - unknown game slug
/// * `400 Bad Request` - balance below the game cost
/// * `409 Conflict` - balance changed by a concurrent request
pub async fn play_game(
    State(economy): State<EconomyService>,
    AuthUser(user): AuthUser,
    Path(slug): Path<String>,
) -> BackendResult<Json<GameResultResponse>> {
    let game = Game::from_slug(&slug).ok_or_else(|| {
        tracing::warn!("Unknown game requested: {}", slug);
        BackendError::not_found("Game not found")
    })?;

    let receipt = economy.play(game, &user).await?;
    Ok(Json(receipt.into()))
}
