use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Custody interface of the external staking-token ledger.
///
/// Implementations move the actual funds; the game engine only records the
/// resulting balances. A failed transfer must leave the underlying ledger
/// unchanged so the caller can safely retry.
#[async_trait]
pub trait TokenLedger: Send + Sync {
    /// Pull `amount` of the staking token from `from` into the game pool.
    async fn deposit(&self, from: Uuid, amount: u64) -> Result<()>;

    /// Push `amount` of the staking token from the game pool to `to`.
    async fn payout(&self, to: Uuid, amount: u64) -> Result<()>;
}
