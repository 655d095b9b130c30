//! Resolved event log record returned by the oracle.

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// The decoded fields of an ERC-20 `Transfer` event log.
///
/// Produced by the event log oracle for each active claim slot. The oracle
/// guarantees the record was decoded under the `Transfer(address,address,
/// uint256)` topic layout; this type carries no proof of that by itself.
///
/// The `Default` value (all-zero addresses, zero value) serves as the
/// harmless placeholder record for padding slots, whose content is
/// suppressed by the activity mask in every downstream computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLogRecord {
    /// The contract that emitted the log (the token contract).
    pub emitter: Address,
    /// The transfer sender (`topic1`).
    pub from: Address,
    /// The transfer recipient (`topic2`).
    pub to: Address,
    /// The transferred value (first data word).
    pub value: U256,
}

impl EventLogRecord {
    /// Create a new event log record.
    pub const fn new(emitter: Address, from: Address, to: Address, value: U256) -> Self {
        Self { emitter, from, to, value }
    }
}
