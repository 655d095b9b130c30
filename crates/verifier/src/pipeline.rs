//! The batch verification pipeline.
//!
//! [`BatchVerifier`] runs the stages in a fixed order: shape validation,
//! identifier construction, the ordering sweep, oracle resolution,
//! consistency aggregation, and result packaging. Any stage failure aborts
//! the run with a typed error; nothing partial is ever published.

use crate::{
    BatchCapacity, ValidatedBatch, VerifyResult, aggregate_records, build_slot_ids,
    check_strictly_ascending, publish, select_id, validate_batch,
};
use reclaim_oracle::{OracleError, OracleHandle};
use reclaim_types::{AggregateResult, ClaimBatch, EventLogRecord};
use tracing::{debug, instrument};

/// Verifies claim batches against an event log oracle.
///
/// The verifier holds a cloneable [`OracleHandle`] and a fixed batch
/// capacity; it is cheap to clone and safe to share across tasks. Each call
/// to [`verify`](Self::verify) is an independent run.
#[derive(Debug, Clone)]
pub struct BatchVerifier {
    capacity: BatchCapacity,
    oracle: OracleHandle,
}

impl BatchVerifier {
    /// Create a verifier with the given oracle handle and batch capacity.
    pub const fn new(oracle: OracleHandle, capacity: BatchCapacity) -> Self {
        Self { capacity, oracle }
    }

    /// Returns the configured batch capacity.
    pub const fn capacity(&self) -> BatchCapacity {
        self.capacity
    }

    /// Verify a claim batch and produce its aggregate result.
    ///
    /// # Errors
    ///
    /// Returns the first stage failure encountered; see
    /// [`VerifyError`](crate::VerifyError) for the taxonomy. Claim count and
    /// ordering violations are reported before any oracle lookup is issued.
    #[instrument(skip_all, fields(num_claims = batch.num_claims))]
    pub async fn verify(&self, batch: &ClaimBatch) -> VerifyResult<AggregateResult> {
        let validated = validate_batch(batch, self.capacity)?;
        debug!("Batch shape validated");

        let slots = build_slot_ids(&validated);
        check_strictly_ascending(&slots.ids)?;
        debug!("Claim identifiers strictly ascending");

        let records = self.resolve_records(&validated).await?;
        debug!(records = records.len(), "Resolved claim logs");

        let aggregate = aggregate_records(&records, &slots.active)?;

        let first_claim_id = slots.ids[0];
        let last_claim_id = select_id(&slots.ids, (validated.num_claims() - 1) as usize);
        Ok(publish(&aggregate, first_claim_id, last_claim_id))
    }

    /// Resolve one record per slot, fanning the active lookups out.
    ///
    /// Every active slot's request is dispatched before any response is
    /// joined, so the lookups run concurrently inside the oracle task. The
    /// receivers are then joined in slot order, which keeps the output
    /// deterministic regardless of completion order. Padding slots get the
    /// placeholder record without a lookup.
    async fn resolve_records(
        &self,
        batch: &ValidatedBatch<'_>,
    ) -> VerifyResult<Vec<EventLogRecord>> {
        let capacity = batch.capacity();

        let mut pending = Vec::with_capacity(capacity);
        for index in 0..capacity {
            if batch.is_active(index) {
                pending.push(Some(self.oracle.dispatch(batch.coordinate(index)).await?));
            } else {
                pending.push(None);
            }
        }

        let mut records = Vec::with_capacity(capacity);
        for receiver in pending {
            match receiver {
                Some(receiver) => {
                    records.push(receiver.await.map_err(|_| OracleError::Cancelled)??)
                }
                None => records.push(EventLogRecord::default()),
            }
        }
        Ok(records)
    }
}
