//! Identifier construction over the full slot array.
//!
//! The second pipeline stage. Every slot, active or padding, gets a packed
//! identifier masked by its activity flag, in one fixed-length pass. Padding
//! slots come out as exactly zero no matter what their columns hold, which
//! is what lets the later stages treat the arrays uniformly.

use crate::ValidatedBatch;
use reclaim_types::ClaimId;

/// The per-slot identifier and activity columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotIds {
    /// Masked claim identifier per slot. Zero for padding slots.
    pub ids: Vec<ClaimId>,
    /// Activity flag per slot: `true` for slots `0..num_claims`.
    pub active: Vec<bool>,
}

/// Build the masked identifier and activity columns for a validated batch.
///
/// The pass covers every slot in `0..capacity` unconditionally; which slots
/// are active depends only on `num_claims`.
pub fn build_slot_ids(batch: &ValidatedBatch<'_>) -> SlotIds {
    let capacity = batch.capacity();
    let mut ids = Vec::with_capacity(capacity);
    let mut active = Vec::with_capacity(capacity);

    for index in 0..capacity {
        let is_active = batch.is_active(index);
        ids.push(ClaimId::masked(batch.coordinate(index), is_active));
        active.push(is_active);
    }

    SlotIds { ids, active }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BatchCapacity, validate_batch};
    use reclaim_types::{ClaimBatch, LogCoordinate};

    #[test]
    fn active_slots_pack_padding_slots_zero() {
        let batch = ClaimBatch::new(
            2,
            vec![100, 101, u64::MAX, u64::MAX],
            vec![1, 2, u64::MAX, u64::MAX],
            vec![0, 0, u64::MAX, u64::MAX],
        );
        let validated = validate_batch(&batch, BatchCapacity::new(4).unwrap()).unwrap();

        let slots = build_slot_ids(&validated);
        assert_eq!(slots.ids.len(), 4);
        assert_eq!(slots.active, vec![true, true, false, false]);

        assert_eq!(slots.ids[0], ClaimId::pack(LogCoordinate::new(100, 1, 0)));
        assert_eq!(slots.ids[1], ClaimId::pack(LogCoordinate::new(101, 2, 0)));

        // Padding garbage is fully suppressed by the mask.
        assert_eq!(slots.ids[2], ClaimId::ZERO);
        assert_eq!(slots.ids[3], ClaimId::ZERO);
    }

    #[test]
    fn all_slots_active_at_full_capacity() {
        let batch = ClaimBatch::new(3, vec![1, 2, 3], vec![0, 0, 0], vec![0, 0, 0]);
        let validated = validate_batch(&batch, BatchCapacity::new(3).unwrap()).unwrap();

        let slots = build_slot_ids(&validated);
        assert!(slots.active.iter().all(|&a| a));
        assert!(slots.ids.iter().all(|id| !id.is_zero()));
    }
}
