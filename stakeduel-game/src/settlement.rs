use crate::error::{GameError, Result};
use crate::game::{Duel, GamePhase};
use crate::rules::TiePolicy;
use chrono::{DateTime, Utc};
use stakeduel_core::GameEvent;
use uuid::Uuid;

/// Final outcome of a duel, fixed the first time settlement runs so the
/// winner cannot flip between the two claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// `None` on a tie.
    pub winner: Option<Uuid>,
    /// Each player's asset valuation at settlement prices.
    pub valuations: Vec<(Uuid, u128)>,
}

/// What one claim paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub amount: u64,
    pub is_winner: bool,
}

impl Duel {
    /// Valuation of a player's asset holdings at fresh oracle prices.
    /// The remaining staked balance is deliberately not counted.
    pub async fn valuation(&self, player: Uuid, now: DateTime<Utc>) -> Result<u128> {
        let mut total: u128 = 0;
        for asset in &self.rules.assets {
            let point = self.oracle.fresh_price(asset, now).await?;
            let held = self.ledger.balance_of(player, asset);
            total += u128::from(held) * u128::from(point.price);
        }
        Ok(total)
    }

    async fn settle(&self, now: DateTime<Utc>) -> Result<Settlement> {
        let p1 = self.players[0].id();
        let p2 = self.players[1].id();

        // one price read per asset covers both players
        let mut v1: u128 = 0;
        let mut v2: u128 = 0;
        for asset in &self.rules.assets {
            let point = self.oracle.fresh_price(asset, now).await?;
            v1 += u128::from(self.ledger.balance_of(p1, asset)) * u128::from(point.price);
            v2 += u128::from(self.ledger.balance_of(p2, asset)) * u128::from(point.price);
        }

        let winner = if v1 > v2 {
            Some(p1)
        } else if v2 > v1 {
            Some(p2)
        } else {
            None
        };

        Ok(Settlement {
            winner,
            valuations: vec![(p1, v1), (p2, v2)],
        })
    }

    /// Claim the caller's share of the reward. Each player can claim
    /// exactly once; win or lose, the claim flag is set so retries fail
    /// with `AlreadyClaimed`.
    ///
    /// Settlement prices are read at the first claim and cached; the
    /// payout completes before any state is mutated, so a failed payout
    /// leaves the claim retryable.
    pub async fn claim_reward(&mut self, caller: Uuid, now: DateTime<Utc>) -> Result<ClaimOutcome> {
        if !self.is_ended(now) {
            return Err(GameError::GameNotEnded);
        }
        let idx = self
            .players
            .iter()
            .position(|slot| slot.id() == caller)
            .ok_or(GameError::NotAPlayer(caller))?;
        if self.players[idx].reward_claimed() {
            return Err(GameError::AlreadyClaimed(caller));
        }

        let settlement = match &self.settlement {
            Some(settlement) => settlement.clone(),
            None => self.settle(now).await?,
        };

        let (amount, is_winner) = match settlement.winner {
            Some(winner) if winner == caller => (self.rules.reward_amount, true),
            Some(_) => (0, false),
            None => match self.rules.tie_policy {
                TiePolicy::NoReward => (0, false),
                TiePolicy::Split => (self.rules.reward_amount / 2, false),
            },
        };

        if amount > 0 {
            self.token.payout(caller, amount).await?;
        }

        if self.settlement.is_none() {
            if let Some(winner) = settlement.winner {
                tracing::info!("Game {} winner: {}", self.id, winner);
                self.events.emit(GameEvent::GameWinner {
                    game_id: self.id,
                    winner,
                });
            }
            self.settlement = Some(settlement);
        }

        self.players[idx].mark_claimed();
        self.phase = if self.players.iter().all(|slot| slot.reward_claimed()) {
            GamePhase::Settled
        } else {
            GamePhase::Ended
        };

        tracing::info!(
            "Player {} claimed {} from game {} (winner: {})",
            caller,
            amount,
            self.id,
            is_winner
        );
        self.events.emit(GameEvent::RewardClaimed {
            game_id: self.id,
            player: caller,
            amount,
            is_winner,
        });

        Ok(ClaimOutcome { amount, is_winner })
    }
}
