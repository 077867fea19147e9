//! Weighted Payout Tables
//!
//! A payout table is an ordered list of tiers, each pairing a coin amount with
//! the probability of landing on it. Sampling walks the tiers in order while
//! accumulating probability mass and stops at the first tier whose cumulative
//! mass reaches the draw.
//!
//! # Boundary Handling
//!
//! Tier probabilities are meant to sum to 1.0, but floating-point accumulation
//! can leave the final cumulative mass a hair below it. A draw that lands in
//! that gap falls back to the table's first (lowest) tier.
//!
//! # Example
//!
//! ```rust
//! use coin_arcade::shared::payout::{PayoutTable, PayoutTier};
//!
//! const TIERS: &[PayoutTier] = &[PayoutTier::new(1, 0.5), PayoutTier::new(2, 0.5)];
//! let table = PayoutTable::new(TIERS);
//! assert_eq!(table.sample(0.25), 1);
//! assert_eq!(table.sample(0.75), 2);
//! ```

use rand::Rng;

/// A single outcome of a payout table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoutTier {
    /// Coins paid out when this tier is selected
    pub coins: i64,
    /// Probability mass of this tier (not cumulative)
    pub probability: f64,
}

impl PayoutTier {
    pub const fn new(coins: i64, probability: f64) -> Self {
        Self { coins, probability }
    }
}

/// Ordered cumulative-distribution sampler over payout tiers
#[derive(Debug, Clone, Copy)]
pub struct PayoutTable {
    tiers: &'static [PayoutTier],
}

impl PayoutTable {
    /// Create a table from tiers listed in selection order.
    ///
    /// The table must contain at least one tier.
    pub const fn new(tiers: &'static [PayoutTier]) -> Self {
        assert!(!tiers.is_empty(), "payout table needs at least one tier");
        Self { tiers }
    }

    /// Every coin amount this table can pay out
    pub fn payouts(&self) -> impl Iterator<Item = i64> + '_ {
        self.tiers.iter().map(|tier| tier.coins)
    }

    /// The amount paid when a draw escapes all accumulated mass
    pub fn fallback(&self) -> i64 {
        self.tiers[0].coins
    }

    /// Select the payout for a draw `r` in `[0, 1)`.
    pub fn sample(&self, r: f64) -> i64 {
        let mut cumulative = 0.0;
        for tier in self.tiers {
            cumulative += tier.probability;
            if r <= cumulative {
                return tier.coins;
            }
        }
        self.fallback()
    }

    /// Draw uniformly from `rng` and select a payout.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        self.sample(rng.gen::<f64>())
    }

    /// Sum of all tier probabilities
    pub fn total_probability(&self) -> f64 {
        self.tiers.iter().map(|tier| tier.probability).sum()
    }
}
