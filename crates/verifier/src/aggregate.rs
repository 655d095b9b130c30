//! Consistency checking and value aggregation over resolved records.
//!
//! The fifth pipeline stage. Slot 0's record is the reference; one uniform
//! pass over every slot multiplies each comparison and each value term by
//! the slot's activity mask, so padding records can neither fail a check
//! nor contribute to the total.

use crate::{ClaimField, VerifyError, VerifyResult};
use alloy::primitives::U256;
use reclaim_types::EventLogRecord;

/// The consistency-checked aggregate of a batch's resolved records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregate {
    /// Slot 0's record, which every active slot matched on `(emitter, from,
    /// to)`.
    pub reference: EventLogRecord,
    /// Sum of `value` over the active slots.
    pub total_value: U256,
}

/// Check all active records against slot 0 and sum their values.
///
/// The pass covers every slot unconditionally; the activity mask zeroes the
/// contribution of padding slots. Slot 0 is always active, so the reference
/// is always a resolved record.
///
/// # Errors
///
/// Returns [`VerifyError::InconsistentClaimSource`] naming the first active
/// slot whose `(emitter, from, to)` diverges from the reference, and which
/// field diverged.
///
/// # Panics
///
/// Panics if `records` is empty. The pipeline only calls this with one
/// record per slot of a validated batch, and capacity is always positive.
pub fn aggregate_records(
    records: &[EventLogRecord],
    active: &[bool],
) -> VerifyResult<Aggregate> {
    let reference = records[0];
    let mut total_value = U256::ZERO;

    for (index, record) in records.iter().enumerate() {
        let mask = u64::from(active[index]);

        if mask * u64::from(record.emitter != reference.emitter) != 0 {
            return Err(VerifyError::InconsistentClaimSource {
                index,
                field: ClaimField::TokenContract,
            });
        }
        if mask * u64::from(record.from != reference.from) != 0 {
            return Err(VerifyError::InconsistentClaimSource { index, field: ClaimField::From });
        }
        if mask * u64::from(record.to != reference.to) != 0 {
            return Err(VerifyError::InconsistentClaimSource { index, field: ClaimField::To });
        }

        total_value += U256::from(mask) * record.value;
    }

    Ok(Aggregate { reference, total_value })
}
