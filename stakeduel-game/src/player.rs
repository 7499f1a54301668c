use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One enrolled player's slot in a duel. Balances live in the game's
/// ledger; the slot tracks identity and the one-time claim flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSlot {
    id: Uuid,
    reward_claimed: bool,
}

impl PlayerSlot {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            reward_claimed: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn reward_claimed(&self) -> bool {
        self.reward_claimed
    }

    /// One-way flag: a claim can never be unset.
    pub(crate) fn mark_claimed(&mut self) {
        self.reward_claimed = true;
    }
}
