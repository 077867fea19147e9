//! Shared Module
//!
//! Platform-agnostic game logic with no server dependencies: the weighted
//! payout sampler and the mini-game definitions built on it. Everything here
//! is pure and deterministic for a given draw, so it compiles without the
//! `ssr` feature.

/// Cumulative-distribution payout sampler
pub mod payout;

/// Mini-game costs, payout tables and outcome messages
pub mod games;

pub use games::{Game, GameOutcome};
pub use payout::{PayoutTable, PayoutTier};
