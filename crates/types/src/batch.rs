//! Caller-supplied claim batch input.

use crate::LogCoordinate;
use alloy::primitives::BlockNumber;

/// A batch of refund claims, as supplied by the caller.
///
/// The batch carries an active-claim count and three parallel columns of
/// claim coordinates. Every column must hold exactly the verifier's
/// configured capacity of entries; slots at index `>= num_claims` are
/// padding whose content is ignored via masking. The batch is constructed
/// once and never mutated.
///
/// Shape and count are *not* validated here. That is the verifier's first
/// stage, which reports typed errors for violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimBatch {
    /// Number of active claims. Must satisfy `1 <= num_claims <= capacity`.
    pub num_claims: u64,
    /// Block number of each claimed transaction, one entry per slot.
    pub block_numbers: Vec<BlockNumber>,
    /// Transaction index within the block, one entry per slot.
    pub tx_idxs: Vec<u64>,
    /// Log index within the transaction's receipt, one entry per slot.
    pub log_idxs: Vec<u64>,
}

impl ClaimBatch {
    /// Create a new claim batch.
    pub const fn new(
        num_claims: u64,
        block_numbers: Vec<BlockNumber>,
        tx_idxs: Vec<u64>,
        log_idxs: Vec<u64>,
    ) -> Self {
        Self { num_claims, block_numbers, tx_idxs, log_idxs }
    }

    /// Returns the coordinate stored in the given slot.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for any column. The verifier only
    /// calls this after the batch shape has been validated.
    pub fn coordinate(&self, index: usize) -> LogCoordinate {
        LogCoordinate::new(self.block_numbers[index], self.tx_idxs[index], self.log_idxs[index])
    }
}
