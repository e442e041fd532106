use slotclock_types::PerformanceSample;

use crate::error::{EstimateError, Result};

/// Throughput-weighted average slot time in seconds.
///
/// Computed as total seconds over total slots across every sample, so a
/// window with more slots weighs proportionally more. Fails when there are
/// no samples or they report zero slots in total.
pub fn average_slot_time(samples: &[PerformanceSample]) -> Result<f64> {
    let (total_slots, total_secs) = samples.iter().fold((0u64, 0f64), |(slots, secs), s| {
        (slots.saturating_add(s.num_slots), secs + s.sample_period_secs)
    });

    if total_slots == 0 {
        return Err(EstimateError::NoPerformanceSamples);
    }

    Ok(total_secs / total_slots as f64)
}
