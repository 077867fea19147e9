/**
 * Economy Handler Types
 *
 * Request and response bodies for purchase and game plays.
 */

use serde::{Deserialize, Serialize};

use crate::backend::economy::service::{PlayReceipt, PurchaseReceipt};

/// Purchase request
#[derive(Deserialize, Serialize, Debug)]
pub struct PurchaseRequest {
    /// Catalog item id as returned by `GET /api/items`
    pub item_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PurchaseResponse {
    pub message: String,
    pub coins_remaining: i64,
}

impl From<PurchaseReceipt> for PurchaseResponse {
    fn from(receipt: PurchaseReceipt) -> Self {
        Self {
            message: receipt.message,
            coins_remaining: receipt.coins_remaining,
        }
    }
}

/// Game result response
///
/// `item_won` is always `null`; games only pay out coins.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameResultResponse {
    pub success: bool,
    pub coins_won: i64,
    pub item_won: Option<String>,
    pub message: String,
}

impl From<PlayReceipt> for GameResultResponse {
    fn from(receipt: PlayReceipt) -> Self {
        Self {
            success: true,
            coins_won: receipt.outcome.coins_won,
            item_won: None,
            message: receipt.outcome.message,
        }
    }
}
