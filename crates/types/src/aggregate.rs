//! Final aggregate result published by the verification pipeline.

use crate::ClaimId;
use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// The attested summary of a fully verified claim batch.
///
/// Produced only when every pipeline stage has succeeded; there are no
/// partial results. The addresses are taken from slot 0's resolved record,
/// which every other active slot has been checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// The shared transfer sender.
    pub from: Address,
    /// The shared transfer recipient.
    pub to: Address,
    /// Sum of the transferred value over all active slots.
    pub total_value: U256,
    /// The shared token contract that emitted every claimed transfer.
    pub token_contract: Address,
    /// Identifier of the first active claim (slot 0).
    pub first_claim_id: ClaimId,
    /// Identifier of the last active claim (slot `num_claims - 1`).
    pub last_claim_id: ClaimId,
}

impl AggregateResult {
    /// Create a new aggregate result.
    pub const fn new(
        from: Address,
        to: Address,
        total_value: U256,
        token_contract: Address,
        first_claim_id: ClaimId,
        last_claim_id: ClaimId,
    ) -> Self {
        Self { from, to, total_value, token_contract, first_claim_id, last_claim_id }
    }

    /// Returns the result as the fixed-order 6-tuple consumed by the
    /// downstream settlement contract:
    /// `(from, to, total_value, token_contract, first_claim_id, last_claim_id)`.
    pub const fn into_tuple(self) -> (Address, Address, U256, Address, ClaimId, ClaimId) {
        (
            self.from,
            self.to,
            self.total_value,
            self.token_contract,
            self.first_claim_id,
            self.last_claim_id,
        )
    }
}
