//! Batch shape and claim count validation.
//!
//! The first pipeline stage. It checks that the batch's coordinate columns
//! each hold exactly one entry per slot and that the declared claim count is
//! within bounds, producing a [`ValidatedBatch`] witness that every later
//! stage takes by reference. The later stages index columns freely; they are
//! unreachable without the witness, so those accesses cannot go out of
//! bounds.

use crate::{BatchCapacity, VerifyError, VerifyResult};
use reclaim_types::{ClaimBatch, LogCoordinate};

/// A claim batch whose shape and claim count have been validated.
///
/// Holds the batch by reference together with the capacity it was validated
/// against. All column accesses through this type are in bounds.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedBatch<'a> {
    batch: &'a ClaimBatch,
    capacity: usize,
}

impl ValidatedBatch<'_> {
    /// Returns the number of slots in the batch.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the declared number of active claims.
    ///
    /// Guaranteed to satisfy `1 <= num_claims <= capacity`.
    pub const fn num_claims(&self) -> u64 {
        self.batch.num_claims
    }

    /// Returns `true` if the slot at `index` holds an active claim.
    ///
    /// Slots `0..num_claims` are active; the rest are padding.
    pub const fn is_active(&self, index: usize) -> bool {
        (index as u64) < self.batch.num_claims
    }

    /// Returns the coordinate stored in the given slot.
    pub fn coordinate(&self, index: usize) -> LogCoordinate {
        self.batch.coordinate(index)
    }
}

/// Validate a claim batch against the configured capacity.
///
/// Checks, in order:
///
/// 1. every coordinate column holds exactly `capacity` entries;
/// 2. `1 <= num_claims <= capacity`.
///
/// # Errors
///
/// Returns [`VerifyError::InvalidBatchShape`] naming the first offending
/// column, or [`VerifyError::ClaimCountOutOfRange`] for a count violation.
pub fn validate_batch(
    batch: &ClaimBatch,
    capacity: BatchCapacity,
) -> VerifyResult<ValidatedBatch<'_>> {
    let expected = capacity.get();

    let columns: [(&'static str, usize); 3] = [
        ("block_numbers", batch.block_numbers.len()),
        ("tx_idxs", batch.tx_idxs.len()),
        ("log_idxs", batch.log_idxs.len()),
    ];
    for (column, len) in columns {
        if len != expected {
            return Err(VerifyError::InvalidBatchShape { column, len, expected });
        }
    }

    if batch.num_claims == 0 || batch.num_claims > expected as u64 {
        return Err(VerifyError::ClaimCountOutOfRange {
            num_claims: batch.num_claims,
            max: expected,
        });
    }

    Ok(ValidatedBatch { batch, capacity: expected })
}
