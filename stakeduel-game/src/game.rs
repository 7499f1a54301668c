use crate::error::{GameError, Result};
use crate::player::PlayerSlot;
use crate::rules::GameRules;
use crate::settlement::Settlement;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stakeduel_core::{AssetLedger, EventSink, GameEvent, OracleAdapter, TokenLedger};
use std::sync::Arc;
use uuid::Uuid;

/// Lifecycle phase of a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Created,
    Enrolling,
    Active,
    Ended,
    Settled,
}

/// A single two-player staking/trading session.
///
/// The duel gates every operation on its phase: no trades before the game
/// is active, no settlement before the duration has elapsed, no payout
/// twice. Trading and settlement live in their own modules; this one owns
/// creation, enrollment and the closure check.
pub struct Duel {
    pub(crate) id: Uuid,
    pub(crate) phase: GamePhase,
    pub(crate) rules: GameRules,
    pub(crate) oracle: OracleAdapter,
    pub(crate) token: Arc<dyn TokenLedger>,
    pub(crate) events: Arc<dyn EventSink>,
    pub(crate) players: Vec<PlayerSlot>,
    pub(crate) ledger: AssetLedger,
    pub(crate) start_time: Option<DateTime<Utc>>,
    pub(crate) settlement: Option<Settlement>,
}

/// Snapshot of a duel for display and host-side persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: Uuid,
    pub phase: GamePhase,
    pub players: Vec<Uuid>,
    pub start_time: Option<DateTime<Utc>>,
    pub staking_amount: u64,
    pub duration_secs: u64,
    pub reward_amount: u64,
    pub assets: Vec<String>,
    pub winner: Option<Uuid>,
}

impl Duel {
    pub fn new(
        rules: GameRules,
        oracle: OracleAdapter,
        token: Arc<dyn TokenLedger>,
        events: Arc<dyn EventSink>,
    ) -> Result<Self> {
        rules.validate()?;

        Ok(Self {
            id: Uuid::new_v4(),
            phase: GamePhase::Created,
            rules,
            oracle,
            token,
            events,
            players: Vec::with_capacity(2),
            ledger: AssetLedger::new(),
            start_time: None,
            settlement: None,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn players(&self) -> Vec<Uuid> {
        self.players.iter().map(|slot| slot.id()).collect()
    }

    /// The winner, once settlement has run. `None` before the first claim
    /// and on ties.
    pub fn winner(&self) -> Option<Uuid> {
        self.settlement.as_ref().and_then(|s| s.winner)
    }

    pub fn stake_of(&self, player: Uuid) -> u64 {
        self.ledger.stake_of(player)
    }

    pub fn asset_balance(&self, player: Uuid, asset: &str) -> u64 {
        self.ledger.balance_of(player, asset)
    }

    pub(crate) fn require_player(&self, caller: Uuid) -> Result<()> {
        if self.players.iter().any(|slot| slot.id() == caller) {
            Ok(())
        } else {
            Err(GameError::NotAPlayer(caller))
        }
    }

    /// Enroll the caller, taking their stake through the token
    /// collaborator. The second enrollment starts the game.
    pub async fn enroll(&mut self, caller: Uuid, now: DateTime<Utc>) -> Result<()> {
        if self.players.iter().any(|slot| slot.id() == caller) {
            return Err(GameError::AlreadyEnrolled(caller));
        }
        if self.players.len() >= 2 {
            return Err(GameError::GameFull);
        }

        // Take the stake before admitting the player
        self.token.deposit(caller, self.rules.staking_amount).await?;

        self.players.push(PlayerSlot::new(caller));
        self.ledger.open_account(caller, self.rules.staking_amount);
        for (asset, amount) in self.rules.assets.iter().zip(&self.rules.asset_amounts) {
            self.ledger.credit(caller, asset, *amount)?;
        }
        self.phase = GamePhase::Enrolling;

        tracing::info!("Player {} enrolled in game {}", caller, self.id);
        self.events.emit(GameEvent::PlayerEnrolled {
            game_id: self.id,
            player: caller,
        });

        if self.players.len() == 2 {
            self.activate(now);
        }

        Ok(())
    }

    /// Explicit activation. Enrollment of the second player already does
    /// this, so calling it afterwards is a no-op.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<()> {
        if self.players.len() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }
        if matches!(self.phase, GamePhase::Created | GamePhase::Enrolling) {
            self.activate(now);
        }
        Ok(())
    }

    fn activate(&mut self, now: DateTime<Utc>) {
        let start = self.rules.start_time.unwrap_or(now);
        self.start_time = Some(start);
        self.phase = GamePhase::Active;

        tracing::info!("Game {} active, clock starts at {}", self.id, start);
        self.events.emit(GameEvent::GameStarted {
            game_id: self.id,
            start_time: start,
            duration_secs: self.rules.duration_secs,
        });
    }

    /// True once the configured duration has elapsed. Closure is detected
    /// lazily against the caller-supplied time; there is no background
    /// scheduler.
    pub fn is_ended(&self, now: DateTime<Utc>) -> bool {
        match self.start_time {
            Some(start) => now >= start + self.rules.duration(),
            None => false,
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            id: self.id,
            phase: self.phase,
            players: self.players(),
            start_time: self.start_time,
            staking_amount: self.rules.staking_amount,
            duration_secs: self.rules.duration_secs,
            reward_amount: self.rules.reward_amount,
            assets: self.rules.assets.clone(),
            winner: self.winner(),
        }
    }
}

impl std::fmt::Debug for Duel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Duel")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("players", &self.players)
            .field("start_time", &self.start_time)
            .finish()
    }
}
