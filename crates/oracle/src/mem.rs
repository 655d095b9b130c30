//! In-memory oracle backend for testing.
//!
//! This backend stores receipt logs in memory using standard Rust
//! collections. It is primarily intended for testing and development.

use crate::{EventLogOracle, OracleError, OracleResult, decode_transfer};
use alloy::primitives::{Address, BlockNumber, Bytes, Log, LogData, U256};
use reclaim_types::{EventLogRecord, LogCoordinate, TRANSFER_EVENT_SIGNATURE};
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::RwLock;

/// Build a well-formed ERC-20 `Transfer` log.
///
/// Useful for seeding backends in tests.
pub fn transfer_log(token: Address, from: Address, to: Address, value: U256) -> Log {
    Log {
        address: token,
        data: LogData::new_unchecked(
            vec![TRANSFER_EVENT_SIGNATURE, from.into_word(), to.into_word()],
            Bytes::from(value.to_be_bytes::<32>()),
        ),
    }
}

/// Inner storage state.
#[derive(Default)]
struct MemLogOracleInner {
    /// Receipt logs keyed by `(block, tx index)`, in log-index order.
    logs: BTreeMap<(BlockNumber, u64), Vec<Log>>,
}

/// In-memory oracle backend.
///
/// This backend is thread-safe and suitable for concurrent access.
/// All operations are protected by an async read-write lock.
#[derive(Default)]
pub struct MemLogOracle {
    inner: Arc<RwLock<MemLogOracleInner>>,
}

impl MemLogOracle {
    /// Create a new empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw log to the receipt at `(block, tx_index)`.
    ///
    /// The log's index within the receipt is its append position.
    pub async fn insert_log(&self, block: BlockNumber, tx_index: u64, log: Log) {
        let mut inner = self.inner.write().await;
        inner.logs.entry((block, tx_index)).or_default().push(log);
    }

    /// Store a well-formed `Transfer` log at the given coordinate.
    ///
    /// Pads the receipt with empty placeholder logs until the transfer
    /// lands at `coordinate.log_index`. Logs must be inserted in ascending
    /// log-index order per receipt.
    pub async fn insert_transfer(
        &self,
        coordinate: LogCoordinate,
        token: Address,
        from: Address,
        to: Address,
        value: U256,
    ) {
        let mut inner = self.inner.write().await;
        let receipt = inner.logs.entry((coordinate.block, coordinate.tx_index)).or_default();
        while (receipt.len() as u64) < coordinate.log_index {
            receipt.push(Log::default());
        }
        receipt.push(transfer_log(token, from, to, value));
    }
}

impl std::fmt::Debug for MemLogOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemLogOracle").finish_non_exhaustive()
    }
}

impl EventLogOracle for MemLogOracle {
    async fn resolve(&self, coordinate: LogCoordinate) -> OracleResult<EventLogRecord> {
        let inner = self.inner.read().await;
        let log = inner
            .logs
            .get(&(coordinate.block, coordinate.tx_index))
            .and_then(|logs| logs.get(coordinate.log_index as usize))
            .ok_or(OracleError::LogNotFound { coordinate })?;
        decode_transfer(coordinate, log)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::conformance::{conformance, populate_fixtures};

    #[tokio::test]
    async fn mem_backend_conformance() {
        let backend = MemLogOracle::new();
        populate_fixtures(&backend).await;
        conformance(&backend).await.unwrap();
    }

    #[tokio::test]
    async fn resolve_at_nonzero_log_index() {
        let backend = MemLogOracle::new();
        let coordinate = LogCoordinate::new(5, 3, 2);
        let token = Address::repeat_byte(0xAA);
        let from = Address::repeat_byte(0x01);
        let to = Address::repeat_byte(0x02);

        backend.insert_transfer(coordinate, token, from, to, U256::from(9u64)).await;

        let record = backend.resolve(coordinate).await.unwrap();
        assert_eq!(record, EventLogRecord::new(token, from, to, U256::from(9u64)));

        // The padding logs below the transfer are not Transfer events.
        let padding = LogCoordinate::new(5, 3, 0);
        let err = backend.resolve(padding).await.unwrap_err();
        assert!(matches!(err, OracleError::SchemaMismatch { .. }));
    }
}
