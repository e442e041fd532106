//! Slotclock Core - Slot time estimation.
//!
//! Past and present slots are answered from the ledger's recorded block
//! time. Future slots are projected from the current slot's timestamp using
//! the throughput-weighted average slot time of recent performance samples.

pub mod average;
pub mod error;
pub mod estimator;

pub use average::average_slot_time;
pub use error::{ErrorKind, EstimateError, Result};
pub use estimator::{SlotEstimator, SlotTime, DEFAULT_SAMPLE_LIMIT};
