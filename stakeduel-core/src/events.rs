use crate::types::TradeSide;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outward notifications, fire-and-forget. Delivery, indexing and querying
/// are the sink implementation's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerEnrolled {
        game_id: Uuid,
        player: Uuid,
    },
    GameStarted {
        game_id: Uuid,
        start_time: DateTime<Utc>,
        duration_secs: u64,
    },
    AssetTraded {
        game_id: Uuid,
        player: Uuid,
        asset: String,
        side: TradeSide,
        amount: u64,
        price: u64,
    },
    GameWinner {
        game_id: Uuid,
        winner: Uuid,
    },
    RewardClaimed {
        game_id: Uuid,
        player: Uuid,
        amount: u64,
        is_winner: bool,
    },
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: GameEvent);
}

/// Default sink: logs every notification through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: GameEvent) {
        tracing::info!("game event: {:?}", event);
    }
}
