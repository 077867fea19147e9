//! Economy Module
//!
//! Coin spending: catalog purchases and mini-game plays. All balance writes
//! are conditional on the balance the request started from.
//!
//! - **`service`** - Purchase and play logic
//! - **`types`** - Request/response bodies
//! - **`handlers`** - `POST /api/purchase`, `POST /api/games/{game}`

pub mod service;

pub mod types;

pub mod handlers;

pub use handlers::{play_game, purchase};
pub use service::{EconomyService, PlayReceipt, PurchaseReceipt};
pub use types::{GameResultResponse, PurchaseRequest, PurchaseResponse};
