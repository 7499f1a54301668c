use crate::error::{GameError, Result};
use crate::game::{Duel, GamePhase};
use chrono::{DateTime, Utc};
use stakeduel_core::{CoreError, GameEvent, TradeSide};
use uuid::Uuid;

/// A filled trade: the oracle price it executed at and the staking-token
/// value that moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeFill {
    pub price: u64,
    pub cost: u64,
}

impl Duel {
    /// Execute a buy or sell of one of the configured assets against the
    /// caller's staked balance, at a fresh oracle price.
    ///
    /// Every check runs before either balance is touched, so a failing
    /// trade leaves the ledger exactly as it was.
    pub async fn trade(
        &mut self,
        caller: Uuid,
        asset: &str,
        amount: u64,
        side: TradeSide,
        now: DateTime<Utc>,
    ) -> Result<TradeFill> {
        match self.phase {
            GamePhase::Active => {}
            GamePhase::Ended | GamePhase::Settled => return Err(GameError::GameEnded),
            GamePhase::Created | GamePhase::Enrolling => return Err(GameError::GameNotActive),
        }
        if self.is_ended(now) {
            return Err(GameError::GameEnded);
        }
        // A configured future start gates trading even after both players
        // have enrolled.
        if let Some(start) = self.start_time {
            if now < start {
                return Err(GameError::GameNotActive);
            }
        }
        self.require_player(caller)?;
        if !self.rules.assets.iter().any(|a| a == asset) {
            return Err(GameError::UnknownAsset(asset.to_string()));
        }

        let point = self.oracle.fresh_price(asset, now).await?;
        let cost = point
            .price
            .checked_mul(amount)
            .ok_or(CoreError::Overflow("trade cost"))?;

        // Verify both legs before mutating either balance.
        match side {
            TradeSide::Buy => {
                let stake = self.ledger.stake_of(caller);
                if cost > stake {
                    return Err(CoreError::InsufficientBalance {
                        need: cost,
                        available: stake,
                    }
                    .into());
                }
                self.ledger
                    .balance_of(caller, asset)
                    .checked_add(amount)
                    .ok_or(CoreError::Overflow("asset balance"))?;

                self.ledger.debit_stake(caller, cost)?;
                self.ledger.credit(caller, asset, amount)?;
            }
            TradeSide::Sell => {
                let held = self.ledger.balance_of(caller, asset);
                if amount > held {
                    return Err(CoreError::InsufficientBalance {
                        need: amount,
                        available: held,
                    }
                    .into());
                }
                self.ledger
                    .stake_of(caller)
                    .checked_add(cost)
                    .ok_or(CoreError::Overflow("staking balance"))?;

                self.ledger.debit(caller, asset, amount)?;
                self.ledger.credit_stake(caller, cost)?;
            }
        }

        tracing::info!(
            "Player {} {:?} {} {} at price {} in game {}",
            caller,
            side,
            amount,
            asset,
            point.price,
            self.id
        );
        self.events.emit(GameEvent::AssetTraded {
            game_id: self.id,
            player: caller,
            asset: asset.to_string(),
            side,
            amount,
            price: point.price,
        });

        Ok(TradeFill {
            price: point.price,
            cost,
        })
    }
}
