//! Ordering and uniqueness checking over the identifier column.
//!
//! The third pipeline stage. A single strictly-ascending sweep over the
//! masked identifiers enforces both uniqueness and ordering of the active
//! claims: packed identifiers compare like their coordinate triples, and
//! padding slots are zero, so the sweep admits any ascending prefix followed
//! by a zero tail.

use crate::{VerifyError, VerifyResult};
use alloy::primitives::U256;
use reclaim_types::ClaimId;

/// Check that adjacent identifiers are strictly ascending or zero.
///
/// For every `i` in `1..len`, requires `ids[i-1] < ids[i]` unless `ids[i]`
/// is zero (a padding slot).
///
/// # Errors
///
/// Returns [`VerifyError::DuplicateOrUnorderedClaim`] naming the first
/// adjacent pair that violates the rule.
pub fn check_strictly_ascending(ids: &[ClaimId]) -> VerifyResult<()> {
    for index in 1..ids.len() {
        let ordered = ids[index - 1] < ids[index] || ids[index].is_zero();
        if !ordered {
            return Err(VerifyError::DuplicateOrUnorderedClaim { prev_index: index - 1, index });
        }
    }
    Ok(())
}

/// Select the identifier at position `k` without data-dependent branching.
///
/// Sums `ids[i] · (i == k)` over the whole array, so every slot contributes
/// a term and exactly one term is live. Positions past the end of the array
/// select zero.
pub fn select_id(ids: &[ClaimId], k: usize) -> ClaimId {
    let mut selected = U256::ZERO;
    for (index, id) in ids.iter().enumerate() {
        selected += id.into_inner() * U256::from(u64::from(index == k));
    }
    ClaimId::from_scalar(selected)
}
