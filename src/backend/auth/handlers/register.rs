/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Check that neither username nor email is taken
 * 2. Hash password using bcrypt
 * 3. Create user with 1000 coins and an empty inventory
 * 4. Generate JWT token
 * 5. Return token and user info
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendResult;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - username or email already registered
/// * `500 Internal Server Error` - hashing, store or token failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "password": "securepassword123"
/// }
/// ```
pub async fn register(
    State(auth): State<AuthService>,
    Json(request): Json<RegisterRequest>,
) -> BackendResult<Json<AuthResponse>> {
    tracing::info!(
        "Register request for username: {}, email: {}",
        request.username,
        request.email
    );

    let session = auth
        .register(&request.username, &request.email, &request.password)
        .await?;

    Ok(Json(session.into()))
}
