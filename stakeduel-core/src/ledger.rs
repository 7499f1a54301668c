use crate::error::{CoreError, Result};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
struct Account {
    stake: u64,
    assets: HashMap<String, u64>,
}

/// Per-player balance book for one game: staked tokens plus the tradeable
/// asset holdings. Pure bookkeeping - authorization and phase checks are
/// the caller's responsibility.
#[derive(Debug, Clone, Default)]
pub struct AssetLedger {
    accounts: HashMap<Uuid, Account>,
}

impl AssetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the account for a newly admitted player with its staked balance.
    pub fn open_account(&mut self, player: Uuid, stake: u64) {
        let account = self.accounts.entry(player).or_default();
        account.stake = stake;
    }

    pub fn credit(&mut self, player: Uuid, asset: &str, amount: u64) -> Result<()> {
        let account = self.accounts.entry(player).or_default();
        let balance = account.assets.entry(asset.to_string()).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or(CoreError::Overflow("asset balance"))?;
        Ok(())
    }

    pub fn debit(&mut self, player: Uuid, asset: &str, amount: u64) -> Result<()> {
        let account = self.accounts.entry(player).or_default();
        let balance = account.assets.entry(asset.to_string()).or_insert(0);
        if amount > *balance {
            return Err(CoreError::InsufficientBalance {
                need: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        Ok(())
    }

    pub fn credit_stake(&mut self, player: Uuid, amount: u64) -> Result<()> {
        let account = self.accounts.entry(player).or_default();
        account.stake = account
            .stake
            .checked_add(amount)
            .ok_or(CoreError::Overflow("staking balance"))?;
        Ok(())
    }

    pub fn debit_stake(&mut self, player: Uuid, amount: u64) -> Result<()> {
        let account = self.accounts.entry(player).or_default();
        if amount > account.stake {
            return Err(CoreError::InsufficientBalance {
                need: amount,
                available: account.stake,
            });
        }
        account.stake -= amount;
        Ok(())
    }

    /// Asset balance, zero for unknown players or assets.
    pub fn balance_of(&self, player: Uuid, asset: &str) -> u64 {
        self.accounts
            .get(&player)
            .and_then(|account| account.assets.get(asset))
            .copied()
            .unwrap_or(0)
    }

    /// Staked balance, zero for unknown players.
    pub fn stake_of(&self, player: Uuid) -> u64 {
        self.accounts
            .get(&player)
            .map(|account| account.stake)
            .unwrap_or(0)
    }
}
