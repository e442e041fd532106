//! Slotclock Types - Core type definitions shared across slotclock crates.
//!
//! This crate provides:
//! - Slots and Unix timestamps
//! - Networks (the two preset clusters)
//! - Performance samples reported by the ledger RPC
//! - Validated slot queries

pub mod error;
pub mod network;
pub mod query;
pub mod sample;

pub use error::ValidationError;
pub use network::Network;
pub use query::SlotQuery;
pub use sample::PerformanceSample;

/// A sequentially numbered unit of ledger progress.
pub type Slot = u64;

/// Seconds since the Unix epoch, as reported by `getBlockTime`.
pub type UnixTimestamp = i64;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Network, PerformanceSample, Slot, SlotQuery, UnixTimestamp, ValidationError};
}
