//! StakeDuel core - policy-free building blocks for the duel engine
//!
//! This crate holds the pieces that carry no game policy of their own:
//! per-player balance bookkeeping, the oracle read contract with freshness
//! gating, and the narrow interfaces to the external token custody and
//! notification collaborators.

pub mod error;
pub mod events;
pub mod ledger;
pub mod oracle;
pub mod token;
pub mod types;

pub use error::{CoreError, Result};
pub use events::{EventSink, GameEvent, TracingEventSink};
pub use ledger::AssetLedger;
pub use oracle::{OracleAdapter, PriceFeed};
pub use token::TokenLedger;
pub use types::{PricePoint, TradeSide};
