//! Mini-game definitions
//!
//! Each game has a fixed entry cost and a payout table. Playing a game is a
//! pure function of one uniform draw: the outcome records the coins won, the
//! net change against the wager, and the message shown to the player.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::shared::payout::{PayoutTable, PayoutTier};

const LUCKY_SPIN_TIERS: &[PayoutTier] = &[
    PayoutTier::new(10, 0.30),
    PayoutTier::new(25, 0.25),
    PayoutTier::new(50, 0.20),
    PayoutTier::new(100, 0.15),
    PayoutTier::new(200, 0.08),
    PayoutTier::new(500, 0.02),
];

const EGG_SMASH_TIERS: &[PayoutTier] = &[
    PayoutTier::new(5, 0.40),
    PayoutTier::new(15, 0.30),
    PayoutTier::new(30, 0.15),
    PayoutTier::new(50, 0.10),
    PayoutTier::new(100, 0.04),
    PayoutTier::new(200, 0.01),
];

/// Games a player can wager coins on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Game {
    LuckySpin,
    EggSmash,
}

impl Game {
    pub const ALL: [Game; 2] = [Game::LuckySpin, Game::EggSmash];

    /// Resolve a URL slug such as `lucky-spin`
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|game| game.slug() == slug)
    }

    pub fn slug(self) -> &'static str {
        match self {
            Game::LuckySpin => "lucky-spin",
            Game::EggSmash => "egg-smash",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Game::LuckySpin => "Lucky Spin",
            Game::EggSmash => "Egg Smash",
        }
    }

    /// Coins charged per play, regardless of outcome
    pub fn cost(self) -> i64 {
        match self {
            Game::LuckySpin => 50,
            Game::EggSmash => 25,
        }
    }

    pub fn payout_table(self) -> PayoutTable {
        match self {
            Game::LuckySpin => PayoutTable::new(LUCKY_SPIN_TIERS),
            Game::EggSmash => PayoutTable::new(EGG_SMASH_TIERS),
        }
    }

    /// Resolve one play for a draw in `[0, 1)`
    pub fn resolve(self, draw: f64) -> GameOutcome {
        self.outcome_for(self.payout_table().sample(draw))
    }

    /// Play once with a draw taken from `rng`
    pub fn play<R: Rng + ?Sized>(self, rng: &mut R) -> GameOutcome {
        self.outcome_for(self.payout_table().draw(rng))
    }

    fn outcome_for(self, coins_won: i64) -> GameOutcome {
        let net_gain = coins_won - self.cost();
        GameOutcome {
            game: self,
            coins_won,
            net_gain,
            message: self.outcome_message(coins_won, net_gain),
        }
    }

    fn outcome_message(self, coins_won: i64, net_gain: i64) -> String {
        let sign = if net_gain >= 0 { "+" } else { "" };
        match self {
            Game::LuckySpin => {
                format!("You won {coins_won} coins! Net: {sign}{net_gain} coins")
            }
            Game::EggSmash => format!(
                "You smashed an egg and won {coins_won} coins! Net: {sign}{net_gain} coins"
            ),
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Result of a single play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub game: Game,
    pub coins_won: i64,
    /// `coins_won - cost`, negative when the player lost coins
    pub net_gain: i64,
    pub message: String,
}

impl GameOutcome {
    /// Balance after paying the wager and collecting the payout
    pub fn apply_to(&self, balance: i64) -> i64 {
        balance - self.game.cost() + self.coins_won
    }
}
