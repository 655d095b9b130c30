//! Core trait definition for event log oracle backends.
//!
//! The [`EventLogOracle`] trait defines the interface that all oracle
//! backends must implement. A backend owns the mechanics of locating a
//! receipt log and proving its authenticity; the trait is agnostic to those
//! details and only promises decoded `Transfer` records.

use crate::OracleResult;
use reclaim_types::{EventLogRecord, LogCoordinate};
use std::future::Future;

/// Event log oracle backend trait.
///
/// Resolves a `(block, tx_index, log_index)` coordinate to the decoded
/// fields of the ERC-20 `Transfer` event at that location.
///
/// All methods are async and return futures that are `Send`.
///
/// # Implementation Guide
///
/// Implementers must ensure:
///
/// - **Schema enforcement**: a log that exists but does not decode under the
///   `Transfer(address,address,uint256)` topic layout is an error, never a
///   partially filled record. Use
///   [`decode_transfer`](crate::decode_transfer) for this.
///
/// - **Point-lookup independence**: each resolve depends only on its own
///   coordinate, so callers may issue any number of lookups concurrently.
pub trait EventLogOracle: Send + Sync + 'static {
    /// Resolve a single log coordinate to its decoded `Transfer` record.
    fn resolve(
        &self,
        coordinate: LogCoordinate,
    ) -> impl Future<Output = OracleResult<EventLogRecord>> + Send;

    /// Resolve multiple coordinates, preserving input order.
    ///
    /// The default implementation resolves sequentially; backends with a
    /// cheaper batch path should override.
    fn resolve_many(
        &self,
        coordinates: Vec<LogCoordinate>,
    ) -> impl Future<Output = OracleResult<Vec<EventLogRecord>>> + Send {
        async move {
            let mut records = Vec::with_capacity(coordinates.len());
            for coordinate in coordinates {
                records.push(self.resolve(coordinate).await?);
            }
            Ok(records)
        }
    }
}
