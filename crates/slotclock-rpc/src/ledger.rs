use async_trait::async_trait;
use slotclock_types::{PerformanceSample, Slot, UnixTimestamp};

use crate::error::Result;

/// The subset of the ledger RPC surface slotclock needs.
///
/// Implementations are called sequentially; no two calls are ever in flight
/// at once.
#[async_trait]
pub trait LedgerRpc: Send + Sync {
    /// Current slot (`getSlot`).
    async fn get_slot(&self) -> Result<Slot>;

    /// Recorded production time of a slot (`getBlockTime`).
    ///
    /// `None` when the ledger has no timestamp for the slot, e.g. it was
    /// skipped, pruned or is not yet finalized.
    async fn get_block_time(&self, slot: Slot) -> Result<Option<UnixTimestamp>>;

    /// Up to `limit` most recent performance samples, newest first
    /// (`getRecentPerformanceSamples`).
    async fn get_recent_performance_samples(&self, limit: usize) -> Result<Vec<PerformanceSample>>;
}
