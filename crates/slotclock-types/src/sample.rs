//! Performance samples.

/// One observed window of ledger activity, as returned by
/// `getRecentPerformanceSamples`.
///
/// Only `num_slots` and `sample_period_secs` feed the slot-time estimate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PerformanceSample {
    /// Slot at which the sample was taken
    #[cfg_attr(feature = "serde", serde(default))]
    pub slot: u64,
    /// Transactions processed during the window
    #[cfg_attr(feature = "serde", serde(default))]
    pub num_transactions: u64,
    /// Slots produced during the window
    pub num_slots: u64,
    /// Length of the window in seconds
    pub sample_period_secs: f64,
    /// Non-vote transactions, reported by newer RPC servers only
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub num_non_vote_transactions: Option<u64>,
}

impl PerformanceSample {
    /// Create a sample from its slot count and period.
    pub fn new(num_slots: u64, sample_period_secs: f64) -> Self {
        Self {
            num_slots,
            sample_period_secs,
            ..Default::default()
        }
    }
}
