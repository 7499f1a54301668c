use crate::error::{GameError, Result};
use crate::game::{Duel, GameSummary};
use crate::rules::GameRules;
use crate::settlement::ClaimOutcome;
use crate::trading::TradeFill;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use stakeduel_core::{EventSink, OracleAdapter, TokenLedger, TracingEventSink, TradeSide};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Registry of game instances and the caller-facing entry surface.
///
/// Each game sits behind its own lock, so operations touching the same
/// game are serialized while distinct games proceed concurrently. Games
/// are never removed: settled instances stay readable for auditing.
pub struct GameManager {
    games: RwLock<HashMap<Uuid, Arc<Mutex<Duel>>>>,
    events: Arc<dyn EventSink>,
}

impl GameManager {
    pub fn new() -> Self {
        Self::with_events(Arc::new(TracingEventSink))
    }

    pub fn with_events(events: Arc<dyn EventSink>) -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            events,
        }
    }

    /// Create a game and return its id.
    pub fn create_game(
        &self,
        rules: GameRules,
        oracle: OracleAdapter,
        token: Arc<dyn TokenLedger>,
    ) -> Result<Uuid> {
        let duel = Duel::new(rules, oracle, token, self.events.clone())?;
        let id = duel.id();

        {
            let mut games = self.games.write();
            games.insert(id, Arc::new(Mutex::new(duel)));
        }

        tracing::info!("Created game {}", id);
        Ok(id)
    }

    fn game(&self, game_id: Uuid) -> Result<Arc<Mutex<Duel>>> {
        let games = self.games.read();
        games
            .get(&game_id)
            .cloned()
            .ok_or(GameError::GameNotFound(game_id))
    }

    pub async fn enroll(&self, game_id: Uuid, caller: Uuid, now: DateTime<Utc>) -> Result<()> {
        let game = self.game(game_id)?;
        let mut game = game.lock().await;
        game.enroll(caller, now).await
    }

    pub async fn start(&self, game_id: Uuid, now: DateTime<Utc>) -> Result<()> {
        let game = self.game(game_id)?;
        let mut game = game.lock().await;
        game.start(now)
    }

    pub async fn trade(
        &self,
        game_id: Uuid,
        caller: Uuid,
        asset: &str,
        amount: u64,
        side: TradeSide,
        now: DateTime<Utc>,
    ) -> Result<TradeFill> {
        let game = self.game(game_id)?;
        let mut game = game.lock().await;
        game.trade(caller, asset, amount, side, now).await
    }

    pub async fn claim_reward(
        &self,
        game_id: Uuid,
        caller: Uuid,
        now: DateTime<Utc>,
    ) -> Result<ClaimOutcome> {
        let game = self.game(game_id)?;
        let mut game = game.lock().await;
        game.claim_reward(caller, now).await
    }

    pub async fn summary(&self, game_id: Uuid) -> Result<GameSummary> {
        let game = self.game(game_id)?;
        let game = game.lock().await;
        Ok(game.summary())
    }

    pub async fn stake_of(&self, game_id: Uuid, player: Uuid) -> Result<u64> {
        let game = self.game(game_id)?;
        let game = game.lock().await;
        Ok(game.stake_of(player))
    }

    pub async fn asset_balance(&self, game_id: Uuid, player: Uuid, asset: &str) -> Result<u64> {
        let game = self.game(game_id)?;
        let game = game.lock().await;
        Ok(game.asset_balance(player, asset))
    }

    pub fn game_ids(&self) -> Vec<Uuid> {
        self.games.read().keys().copied().collect()
    }
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new()
    }
}
