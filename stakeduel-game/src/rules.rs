use crate::error::{GameError, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// What happens to the reward when the final valuations are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TiePolicy {
    /// Neither player is paid; the reward stays in the pool.
    #[default]
    NoReward,
    /// Each player receives half of the reward at claim time.
    Split,
}

/// Immutable parameters of one game, fixed at creation. No update entry
/// point exists anywhere in the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRules {
    /// Staking-token deposit required from each player on enrollment.
    pub staking_amount: u64,
    pub duration_secs: u64,
    /// Configured start. `None` starts the clock when the second player
    /// enrolls.
    pub start_time: Option<DateTime<Utc>>,
    pub reward_amount: u64,
    /// Identifiers of the two tradeable assets.
    pub assets: Vec<String>,
    /// Initial per-player holdings of each asset, index-aligned with
    /// `assets`.
    pub asset_amounts: Vec<u64>,
    pub tie_policy: TiePolicy,
}

impl GameRules {
    pub fn new(
        staking_amount: u64,
        duration_secs: u64,
        reward_amount: u64,
        assets: [&str; 2],
    ) -> Self {
        Self {
            staking_amount,
            duration_secs,
            start_time: None,
            reward_amount,
            assets: assets.iter().map(|asset| asset.to_string()).collect(),
            asset_amounts: vec![0, 0],
            tie_policy: TiePolicy::default(),
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::seconds(self.duration_secs as i64)
    }

    pub fn validate(&self) -> Result<()> {
        if self.duration_secs == 0 {
            return Err(GameError::InvalidRules(
                "duration must be greater than zero".to_string(),
            ));
        }
        if self.staking_amount == 0 {
            return Err(GameError::InvalidRules(
                "staking amount must be greater than zero".to_string(),
            ));
        }
        if self.assets.len() != 2 {
            return Err(GameError::InvalidRules(format!(
                "expected exactly 2 assets, got {}",
                self.assets.len()
            )));
        }
        if self.asset_amounts.len() != self.assets.len() {
            return Err(GameError::InvalidRules(
                "asset and amount lists must have the same length".to_string(),
            ));
        }
        if self.assets[0] == self.assets[1] {
            return Err(GameError::InvalidRules(
                "asset identifiers must be distinct".to_string(),
            ));
        }
        if self.assets.iter().any(|asset| asset.is_empty()) {
            return Err(GameError::InvalidRules(
                "asset identifiers must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
