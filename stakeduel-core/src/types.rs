use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point-in-time oracle quote for one asset, denominated in the
/// staking token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: u64,
    pub timestamp: DateTime<Utc>,
}

/// Direction of a trade against the staked balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn is_buy(self) -> bool {
        matches!(self, TradeSide::Buy)
    }
}
