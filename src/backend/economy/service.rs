/**
 * Economy Service
 *
 * Every coin movement goes through here: catalog purchases and game wagers.
 * Both follow the same shape:
 *
 * 1. Check the user's balance snapshot against the cost
 * 2. Compute the new balance (and inventory entry, for purchases)
 * 3. Write it with a conditional update keyed on the snapshot balance
 *
 * A failed check returns before anything is written. A conditional write
 * that finds a different balance than the snapshot means another request
 * changed the account in between; the operation is refused with
 * `ConcurrentUpdate` and the caller may retry with a fresh snapshot.
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::store::{BalanceUpdate, Store};
use crate::shared::games::{Game, GameOutcome};

/// A completed purchase
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseReceipt {
    pub coins_remaining: i64,
    pub message: String,
}

/// A completed game play
#[derive(Debug, Clone, PartialEq)]
pub struct PlayReceipt {
    pub outcome: GameOutcome,
    pub coins_remaining: i64,
}

#[derive(Clone)]
pub struct EconomyService {
    store: Arc<dyn Store>,
}

impl EconomyService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Buy a catalog item
    ///
    /// # Errors
    ///
    /// * `NotFound` - `item_id` is not a known item (or not a UUID)
    /// * `InsufficientFunds` - balance below the item price
    /// * `ConcurrentUpdate` - the balance changed since `user` was read
    pub async fn purchase(&self, user: &User, item_id: &str) -> BackendResult<PurchaseReceipt> {
        let item = match Uuid::parse_str(item_id) {
            Ok(id) => self.store.find_item(id).await?,
            Err(_) => None,
        };
        let item = item.ok_or_else(|| {
            tracing::warn!("Item not found: {}", item_id);
            BackendError::not_found("Item not found")
        })?;

        if !user.can_afford(item.coin_price) {
            tracing::warn!(
                "Insufficient coins for {}: has {}, {} costs {}",
                user.username,
                user.coins,
                item.item_name,
                item.coin_price
            );
            return Err(BackendError::insufficient_funds("Insufficient coins"));
        }

        let coins_remaining = user.coins - item.coin_price;
        self.commit(BalanceUpdate {
            user_id: user.id,
            expected_coins: user.coins,
            new_coins: coins_remaining,
            acquired_item: Some(&item.item_name),
        })
        .await?;

        tracing::info!(
            "{} purchased {} for {} coins ({} remaining)",
            user.username,
            item.item_name,
            item.coin_price,
            coins_remaining
        );

        Ok(PurchaseReceipt {
            message: format!("Successfully purchased {}!", item.item_name),
            coins_remaining,
        })
    }

    /// Play a game with a fresh random draw
    pub async fn play(&self, game: Game, user: &User) -> BackendResult<PlayReceipt> {
        Self::ensure_can_play(game, user)?;
        let outcome = game.play(&mut rand::thread_rng());
        self.settle(user, outcome).await
    }

    /// Play a game with a caller-supplied draw in `[0, 1)`
    pub async fn play_with_draw(
        &self,
        game: Game,
        user: &User,
        draw: f64,
    ) -> BackendResult<PlayReceipt> {
        Self::ensure_can_play(game, user)?;
        self.settle(user, game.resolve(draw)).await
    }

    fn ensure_can_play(game: Game, user: &User) -> BackendResult<()> {
        if user.can_afford(game.cost()) {
            return Ok(());
        }
        tracing::warn!(
            "Insufficient coins for {}: has {}, {} costs {}",
            user.username,
            user.coins,
            game,
            game.cost()
        );
        Err(BackendError::insufficient_funds("Insufficient coins to play"))
    }

    async fn settle(&self, user: &User, outcome: GameOutcome) -> BackendResult<PlayReceipt> {
        let coins_remaining = outcome.apply_to(user.coins);
        self.commit(BalanceUpdate {
            user_id: user.id,
            expected_coins: user.coins,
            new_coins: coins_remaining,
            acquired_item: None,
        })
        .await?;

        tracing::info!(
            "{} played {}: won {}, net {} ({} remaining)",
            user.username,
            outcome.game,
            outcome.coins_won,
            outcome.net_gain,
            coins_remaining
        );

        Ok(PlayReceipt {
            outcome,
            coins_remaining,
        })
    }

    async fn commit(&self, update: BalanceUpdate<'_>) -> BackendResult<()> {
        if self.store.apply_balance_update(update).await? {
            Ok(())
        } else {
            tracing::warn!(
                "Balance for user {} changed since it was read (expected {})",
                update.user_id,
                update.expected_coins
            );
            Err(BackendError::ConcurrentUpdate)
        }
    }
}
