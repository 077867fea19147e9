/**
 * Backend Error Types
 *
 * This module defines the error type returned by every service and handler.
 * Each variant maps to exactly one HTTP status code so handlers can return
 * `Result<_, BackendError>` and let the conversion layer build the response.
 *
 * # Error Categories
 *
 * ## Request Errors
 *
 * Terminal for the request and reported to the caller as-is:
 * - Duplicate username or email
 * - Bad credentials or an invalid session token
 * - Unknown item or game
 * - Balance below the required cost
 * - A balance write that lost a race with another request
 *
 * ## Server Errors
 *
 * Store failures and hashing/signing failures. Their details are logged
 * and the caller only sees a generic message.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;

/// Backend error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Username or email already registered
    #[error("{message}")]
    Conflict { message: String },

    /// Bad credentials, or a missing, invalid or expired token
    #[error("{message}")]
    Unauthorized { message: String },

    /// Unknown item id or game
    #[error("{message}")]
    NotFound { message: String },

    /// Balance below the cost of the requested transaction
    ///
    /// The message always contains the word "insufficient".
    #[error("{message}")]
    InsufficientFunds { message: String },

    /// The stored balance changed between read and write
    #[error("Balance changed by another request, please retry")]
    ConcurrentUpdate,

    /// Persistence failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Hashing or token signing failure
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BackendError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn insufficient_funds(message: impl Into<String>) -> Self {
        Self::InsufficientFunds {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Conflict` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `InsufficientFunds` - 400 Bad Request
    /// - `ConcurrentUpdate` - 409 Conflict
    /// - `Store`, `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InsufficientFunds { .. } => StatusCode::BAD_REQUEST,
            Self::ConcurrentUpdate => StatusCode::CONFLICT,
            Self::Store(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the client
    pub fn message(&self) -> String {
        match self {
            Self::Store(_) | Self::Internal { .. } => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}
