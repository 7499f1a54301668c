//! StakeDuel - two-player oracle-priced trading duels
//!
//! Two players stake a token, trade two oracle-priced assets against their
//! staked balances for a fixed duration, and the player holding the more
//! valuable portfolio at expiry claims the reward. The engine enforces the
//! lifecycle strictly: no trading before the game starts, no settlement
//! before it ends, and exactly one claim per player.
//!
//! Token custody, the price feed and notification delivery are external
//! collaborators injected through the traits in `stakeduel-core`.

pub mod error;
pub mod game;
pub mod manager;
pub mod player;
pub mod rules;
pub mod settlement;
pub mod trading;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::{GameError, Result};
pub use game::{Duel, GamePhase, GameSummary};
pub use manager::GameManager;
pub use player::PlayerSlot;
pub use rules::{GameRules, TiePolicy};
pub use settlement::{ClaimOutcome, Settlement};
pub use trading::TradeFill;

pub use stakeduel_core::{
    CoreError, EventSink, GameEvent, OracleAdapter, PriceFeed, PricePoint, TokenLedger,
    TracingEventSink, TradeSide,
};
