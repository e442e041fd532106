//! The validated user request.

use crate::error::ValidationError;
use crate::network::Network;
use crate::Slot;

/// A target slot on a given network.
///
/// Constructed once per invocation, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotQuery {
    pub target_slot: Slot,
    pub network: Network,
}

impl SlotQuery {
    pub fn new(target_slot: Slot, network: Network) -> Self {
        Self { target_slot, network }
    }

    /// Validate raw command-line arguments.
    ///
    /// The slot is checked first, so a bad slot is reported even when the
    /// network is also invalid.
    pub fn parse(slot: &str, network: &str) -> Result<Self, ValidationError> {
        let target_slot = slot
            .parse::<Slot>()
            .map_err(|_| ValidationError::InvalidSlot(slot.to_string()))?;
        let network = network.parse::<Network>()?;
        Ok(Self { target_slot, network })
    }
}
