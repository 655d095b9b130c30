//! Claim-batch verification and aggregation pipeline.
//!
//! This crate verifies batches of ERC-20 refund claims against an event log
//! oracle and aggregates them into a single attested result. A batch is a
//! fixed-capacity array of claim slots, each locating one `Transfer` log by
//! `(block, tx_index, log_index)`; slots past the declared claim count are
//! padding, suppressed everywhere by a 0/1 activity mask rather than by
//! conditional skipping.
//!
//! # Pipeline
//!
//! [`BatchVerifier::verify`] runs the stages in order:
//!
//! 1. **Validation**: column shapes and claim count ([`validate_batch`])
//! 2. **Identifiers**: masked packed ids per slot ([`build_slot_ids`])
//! 3. **Ordering**: strictly-ascending sweep ([`check_strictly_ascending`])
//! 4. **Resolution**: concurrent oracle lookups, joined in slot order
//! 5. **Aggregation**: consistency check + masked sum ([`aggregate_records`])
//! 6. **Publishing**: the final [`AggregateResult`] ([`publish`])
//!
//! Every failure is a typed [`VerifyError`]; there are no partial results.
//!
//! # Example
//!
//! ```ignore
//! use reclaim_verifier::{BatchVerifier, CancellationToken, OracleTask, config::BatchCapacity};
//!
//! let cancel = CancellationToken::new();
//! let handle = OracleTask::spawn(backend, cancel.clone());
//! let verifier = BatchVerifier::new(handle, BatchCapacity::default());
//!
//! let result = verifier.verify(&batch).await?;
//! let (from, to, total, token, first, last) = result.into_tuple();
//! ```

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{ClaimField, VerifyError, VerifyResult};

pub mod config;
pub use config::BatchCapacity;

mod validate;
pub use validate::{ValidatedBatch, validate_batch};

mod identifier;
pub use identifier::{SlotIds, build_slot_ids};

mod ordering;
pub use ordering::{check_strictly_ascending, select_id};

mod aggregate;
pub use aggregate::{Aggregate, aggregate_records};

mod publish;
pub use publish::publish;

mod pipeline;
pub use pipeline::BatchVerifier;

// Re-export key types for convenience
pub use reclaim_oracle::{EventLogOracle, OracleError, OracleHandle, OracleTask};
pub use reclaim_types::{AggregateResult, ClaimBatch, ClaimId, EventLogRecord, LogCoordinate};
pub use tokio_util::sync::CancellationToken;
