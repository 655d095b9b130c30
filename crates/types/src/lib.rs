//! Types shared by the reclaim verification crates.
//!
//! These are plain data carriers: the claim-locating coordinate, the packed
//! claim identifier, the caller-supplied claim batch, the oracle-resolved
//! event record, and the final aggregate result.

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

mod aggregate;
pub use aggregate::AggregateResult;

mod batch;
pub use batch::ClaimBatch;

mod claim_id;
pub use claim_id::ClaimId;

mod coordinate;
pub use coordinate::LogCoordinate;

mod record;
pub use record::EventLogRecord;

use alloy::primitives::{B256, b256};

/// `topic0` of the ERC-20 `Transfer(address,address,uint256)` event.
///
/// Every log the oracle resolves must carry this signature hash as its
/// first topic.
pub const TRANSFER_EVENT_SIGNATURE: B256 =
    b256!("0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");
