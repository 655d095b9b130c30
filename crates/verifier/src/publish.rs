//! Result packaging.
//!
//! The final pipeline stage. Reached only when every prior stage succeeded;
//! it performs no checks of its own.

use crate::Aggregate;
use reclaim_types::{AggregateResult, ClaimId};

/// Package the verified aggregate into the published result.
pub const fn publish(
    aggregate: &Aggregate,
    first_claim_id: ClaimId,
    last_claim_id: ClaimId,
) -> AggregateResult {
    AggregateResult::new(
        aggregate.reference.from,
        aggregate.reference.to,
        aggregate.total_value,
        aggregate.reference.emitter,
        first_claim_id,
        last_claim_id,
    )
}
