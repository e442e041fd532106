//! Slot time estimator.

use slotclock_rpc::LedgerRpc;
use slotclock_types::{Slot, UnixTimestamp};
use tracing::{debug, info, warn};

use crate::average::average_slot_time;
use crate::error::{EstimateError, Result};

/// Performance samples requested when none is configured.
pub const DEFAULT_SAMPLE_LIMIT: usize = 100;

/// Outcome of an estimation run.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotTime {
    /// Past or present slot with a recorded block time.
    Exact {
        slot: Slot,
        timestamp: UnixTimestamp,
    },
    /// Future slot, projected from recent throughput.
    Estimated {
        slot: Slot,
        current_slot: Slot,
        current_timestamp: UnixTimestamp,
        slot_difference: u64,
        estimated_timestamp: f64,
        avg_slot_time: f64,
        sample_count: usize,
    },
    /// Past slot the ledger has no block time for.
    NotFound { slot: Slot },
}

impl SlotTime {
    pub fn slot(&self) -> Slot {
        match self {
            SlotTime::Exact { slot, .. }
            | SlotTime::Estimated { slot, .. }
            | SlotTime::NotFound { slot } => *slot,
        }
    }

    /// Unix timestamp in seconds, fractional for estimates.
    pub fn timestamp(&self) -> Option<f64> {
        match self {
            SlotTime::Exact { timestamp, .. } => Some(*timestamp as f64),
            SlotTime::Estimated { estimated_timestamp, .. } => Some(*estimated_timestamp),
            SlotTime::NotFound { .. } => None,
        }
    }
}

/// Estimates when a slot happened or will happen.
pub struct SlotEstimator<R> {
    rpc: R,
    sample_limit: usize,
}

impl<R: LedgerRpc> SlotEstimator<R> {
    pub fn new(rpc: R) -> Self {
        Self {
            rpc,
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }

    /// Set how many recent performance samples feed an estimate.
    pub fn with_sample_limit(mut self, limit: usize) -> Self {
        self.sample_limit = limit;
        self
    }

    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    /// Resolve `target_slot` to a time.
    ///
    /// Calls are issued one at a time. Performance samples are only fetched
    /// when the target lies after the current slot.
    pub async fn estimate(&self, target_slot: Slot) -> Result<SlotTime> {
        let current_slot = self.rpc.get_slot().await?;
        let current_timestamp = self
            .rpc
            .get_block_time(current_slot)
            .await?
            .ok_or(EstimateError::MissingCurrentTimestamp)?;

        debug!(current_slot, current_timestamp, "fetched current slot");

        let slot_difference = i128::from(target_slot) - i128::from(current_slot);

        if slot_difference <= 0 {
            info!(target_slot, current_slot, "target slot is in the past, looking up block time");
            return match self.rpc.get_block_time(target_slot).await? {
                Some(timestamp) => Ok(SlotTime::Exact {
                    slot: target_slot,
                    timestamp,
                }),
                None => {
                    warn!(target_slot, "ledger has no block time for slot");
                    Ok(SlotTime::NotFound { slot: target_slot })
                }
            };
        }

        // target > current, so the difference fits in a u64
        let slot_difference = slot_difference as u64;
        info!(target_slot, current_slot, slot_difference, "target slot is in the future, estimating");

        let samples = self
            .rpc
            .get_recent_performance_samples(self.sample_limit)
            .await?;
        let avg_slot_time = average_slot_time(&samples)?;
        let estimated_timestamp =
            current_timestamp as f64 + slot_difference as f64 * avg_slot_time;

        debug!(samples = samples.len(), avg_slot_time, estimated_timestamp, "estimate computed");

        Ok(SlotTime::Estimated {
            slot: target_slot,
            current_slot,
            current_timestamp,
            slot_difference,
            estimated_timestamp,
            avg_slot_time,
            sample_count: samples.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use slotclock_rpc::RpcError;
    use slotclock_types::PerformanceSample;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        GetSlot,
        GetBlockTime(Slot),
        GetSamples(usize),
    }

    struct MockLedger {
        current_slot: Slot,
        block_times: HashMap<Slot, UnixTimestamp>,
        samples: Vec<PerformanceSample>,
        fail_samples: bool,
        calls: Mutex<Vec<Call>>,
    }

    impl MockLedger {
        fn new(current_slot: Slot, current_timestamp: UnixTimestamp) -> Self {
            let mut block_times = HashMap::new();
            block_times.insert(current_slot, current_timestamp);
            Self {
                current_slot,
                block_times,
                samples: Vec::new(),
                fail_samples: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn without_current_time(current_slot: Slot) -> Self {
            let mut ledger = Self::new(current_slot, 0);
            ledger.block_times.clear();
            ledger
        }

        fn with_block_time(mut self, slot: Slot, timestamp: UnixTimestamp) -> Self {
            self.block_times.insert(slot, timestamp);
            self
        }

        fn with_samples(mut self, samples: Vec<PerformanceSample>) -> Self {
            self.samples = samples;
            self
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl LedgerRpc for MockLedger {
        async fn get_slot(&self) -> slotclock_rpc::Result<Slot> {
            self.record(Call::GetSlot);
            Ok(self.current_slot)
        }

        async fn get_block_time(&self, slot: Slot) -> slotclock_rpc::Result<Option<UnixTimestamp>> {
            self.record(Call::GetBlockTime(slot));
            Ok(self.block_times.get(&slot).copied())
        }

        async fn get_recent_performance_samples(
            &self,
            limit: usize,
        ) -> slotclock_rpc::Result<Vec<PerformanceSample>> {
            self.record(Call::GetSamples(limit));
            if self.fail_samples {
                return Err(RpcError::Connection("connection reset".into()));
            }
            Ok(self.samples.iter().take(limit).copied().collect())
        }
    }

    const NOW: UnixTimestamp = 1_700_000_000;

    #[tokio::test]
    async fn test_past_slot_exact() {
        let ledger = MockLedger::new(1000, NOW).with_block_time(500, NOW - 200);
        let estimator = SlotEstimator::new(ledger);

        let result = estimator.estimate(500).await.unwrap();
        assert_eq!(result, SlotTime::Exact { slot: 500, timestamp: NOW - 200 });
        assert_eq!(
            estimator.rpc().calls(),
            vec![Call::GetSlot, Call::GetBlockTime(1000), Call::GetBlockTime(500)]
        );
    }

    #[tokio::test]
    async fn test_present_slot_takes_exact_branch() {
        let estimator = SlotEstimator::new(MockLedger::new(1000, NOW));

        let result = estimator.estimate(1000).await.unwrap();
        assert_eq!(result, SlotTime::Exact { slot: 1000, timestamp: NOW });
        assert!(!estimator
            .rpc()
            .calls()
            .iter()
            .any(|c| matches!(c, Call::GetSamples(_))));
    }

    #[tokio::test]
    async fn test_past_slot_without_block_time() {
        let estimator = SlotEstimator::new(MockLedger::new(1000, NOW));

        let result = estimator.estimate(500).await.unwrap();
        assert_eq!(result, SlotTime::NotFound { slot: 500 });
        assert_eq!(result.timestamp(), None);
        assert_eq!(estimator.rpc().calls().len(), 3);
    }

    #[tokio::test]
    async fn test_future_slot_estimate() {
        let ledger = MockLedger::new(1000, NOW).with_samples(vec![
            PerformanceSample::new(50, 20.0),
            PerformanceSample::new(50, 20.0),
        ]);
        let estimator = SlotEstimator::new(ledger);

        let result = estimator.estimate(2000).await.unwrap();
        match result {
            SlotTime::Estimated {
                slot,
                slot_difference,
                estimated_timestamp,
                avg_slot_time,
                sample_count,
                ..
            } => {
                assert_eq!(slot, 2000);
                assert_eq!(slot_difference, 1000);
                assert_eq!(avg_slot_time, 0.4);
                assert!((estimated_timestamp - (NOW + 400) as f64).abs() < 1e-6);
                assert_eq!(sample_count, 2);
            }
            other => panic!("expected estimate, got {:?}", other),
        }
        assert_eq!(
            estimator.rpc().calls(),
            vec![Call::GetSlot, Call::GetBlockTime(1000), Call::GetSamples(DEFAULT_SAMPLE_LIMIT)]
        );
    }

    #[tokio::test]
    async fn test_estimate_is_after_now() {
        let ledger = MockLedger::new(10, NOW).with_samples(vec![PerformanceSample::new(150, 60.0)]);
        let estimator = SlotEstimator::new(ledger);

        let result = estimator.estimate(11).await.unwrap();
        assert!(result.timestamp().unwrap() > NOW as f64);
    }

    #[tokio::test]
    async fn test_sample_limit_is_forwarded() {
        let ledger = MockLedger::new(1000, NOW).with_samples(vec![PerformanceSample::new(100, 40.0)]);
        let estimator = SlotEstimator::new(ledger).with_sample_limit(720);

        estimator.estimate(1001).await.unwrap();
        assert!(estimator.rpc().calls().contains(&Call::GetSamples(720)));
    }

    #[tokio::test]
    async fn test_future_slot_without_samples() {
        let estimator = SlotEstimator::new(MockLedger::new(1000, NOW));

        let err = estimator.estimate(2000).await.unwrap_err();
        assert_eq!(err, EstimateError::NoPerformanceSamples);
    }

    #[tokio::test]
    async fn test_future_slot_with_zero_slot_samples() {
        let ledger = MockLedger::new(1000, NOW).with_samples(vec![PerformanceSample::new(0, 60.0)]);
        let estimator = SlotEstimator::new(ledger);

        let err = estimator.estimate(2000).await.unwrap_err();
        assert_eq!(err, EstimateError::NoPerformanceSamples);
    }

    #[tokio::test]
    async fn test_missing_current_timestamp_is_fatal_for_any_target() {
        for target in [500, 1000, 2000] {
            let estimator = SlotEstimator::new(MockLedger::without_current_time(1000));

            let err = estimator.estimate(target).await.unwrap_err();
            assert_eq!(err, EstimateError::MissingCurrentTimestamp);
            assert_eq!(
                estimator.rpc().calls(),
                vec![Call::GetSlot, Call::GetBlockTime(1000)]
            );
        }
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let mut ledger = MockLedger::new(1000, NOW);
        ledger.fail_samples = true;
        let estimator = SlotEstimator::new(ledger);

        let err = estimator.estimate(2000).await.unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_far_future_slot_does_not_overflow() {
        let ledger = MockLedger::new(0, NOW).with_samples(vec![PerformanceSample::new(1, 0.4)]);
        let estimator = SlotEstimator::new(ledger);

        match estimator.estimate(u64::MAX).await.unwrap() {
            SlotTime::Estimated { slot_difference, .. } => assert_eq!(slot_difference, u64::MAX),
            other => panic!("expected estimate, got {:?}", other),
        }
    }
}
