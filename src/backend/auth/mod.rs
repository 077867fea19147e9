//! Authentication Module
//!
//! User registration, login and session token handling.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User record
//! ├── sessions.rs     - JWT token management
//! ├── service.rs      - Register / login / authenticate
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email, password → user created with 1000 coins → token returned
//! 2. **Login**: username, password → credentials verified → token returned
//! 3. **Me**: bearer token → token verified → user info returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication
//! - Tokens expire after the configured window (30 minutes by default)
//! - Invalid credentials return 401 (no information leakage)

/// User record
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Register, login and token authentication
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use handlers::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use service::{AuthService, Session};
pub use sessions::{Claims, SessionKeys};
pub use users::User;
