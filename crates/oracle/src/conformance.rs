//! Conformance tests for event log oracle backends.
//!
//! These tests verify that any backend implementation behaves correctly
//! according to the [`EventLogOracle`] trait contract. To use these tests
//! with a custom backend, populate it with the fixture logs described by
//! [`fixture_record`] and the `FIXTURE_*` coordinates, then call
//! [`conformance`] with your backend instance.

use crate::{EventLogOracle, OracleError, OracleResult};
use alloy::primitives::{Address, Bytes, Log, LogData, U256};
use reclaim_types::{EventLogRecord, LogCoordinate};

/// Coordinate of a well-formed `Transfer` log fixture.
pub const FIXTURE_TRANSFER: LogCoordinate = LogCoordinate::new(100, 1, 0);

/// Coordinate of a log fixture that is not a `Transfer` event.
pub const FIXTURE_NON_TRANSFER: LogCoordinate = LogCoordinate::new(100, 2, 0);

/// Coordinate with no log behind it.
pub const FIXTURE_MISSING: LogCoordinate = LogCoordinate::new(999, 0, 0);

/// The decoded record backends must produce for [`FIXTURE_TRANSFER`].
pub fn fixture_record() -> EventLogRecord {
    EventLogRecord::new(
        Address::repeat_byte(0xAA),
        Address::repeat_byte(0x01),
        Address::repeat_byte(0x02),
        U256::from(1234u64),
    )
}

/// Populate an in-memory backend with the conformance fixtures.
#[cfg(any(test, feature = "in-memory"))]
pub async fn populate_fixtures(backend: &crate::mem::MemLogOracle) {
    let record = fixture_record();
    backend
        .insert_transfer(FIXTURE_TRANSFER, record.emitter, record.from, record.to, record.value)
        .await;

    // A log with an unrelated topic layout.
    backend
        .insert_log(
            FIXTURE_NON_TRANSFER.block,
            FIXTURE_NON_TRANSFER.tx_index,
            Log {
                address: Address::repeat_byte(0xBB),
                data: LogData::new_unchecked(vec![], Bytes::new()),
            },
        )
        .await;
}

/// Run all conformance tests against a backend.
///
/// This is the main entry point for testing a custom backend implementation.
pub async fn conformance<B: EventLogOracle>(backend: &B) -> OracleResult<()> {
    test_resolve_transfer(backend).await?;
    test_resolve_missing(backend).await?;
    test_schema_mismatch(backend).await?;
    test_resolve_many_preserves_order(backend).await?;
    Ok(())
}

/// Test that a well-formed `Transfer` log decodes to the fixture record.
pub async fn test_resolve_transfer<B: EventLogOracle>(backend: &B) -> OracleResult<()> {
    let record = backend.resolve(FIXTURE_TRANSFER).await?;
    assert_eq!(record, fixture_record());
    Ok(())
}

/// Test that a coordinate with no log behind it is an error, not a default.
pub async fn test_resolve_missing<B: EventLogOracle>(backend: &B) -> OracleResult<()> {
    let err = backend.resolve(FIXTURE_MISSING).await.unwrap_err();
    assert!(matches!(err, OracleError::LogNotFound { coordinate } if coordinate == FIXTURE_MISSING));
    Ok(())
}

/// Test that a log that exists but is not a `Transfer` event is rejected.
pub async fn test_schema_mismatch<B: EventLogOracle>(backend: &B) -> OracleResult<()> {
    let err = backend.resolve(FIXTURE_NON_TRANSFER).await.unwrap_err();
    assert!(
        matches!(err, OracleError::SchemaMismatch { coordinate, .. } if coordinate == FIXTURE_NON_TRANSFER)
    );
    Ok(())
}

/// Test that batch resolution preserves input order.
pub async fn test_resolve_many_preserves_order<B: EventLogOracle>(backend: &B) -> OracleResult<()> {
    let records = backend.resolve_many(vec![FIXTURE_TRANSFER, FIXTURE_TRANSFER]).await?;
    assert_eq!(records, vec![fixture_record(), fixture_record()]);

    // A single failing coordinate fails the whole batch.
    let err = backend.resolve_many(vec![FIXTURE_TRANSFER, FIXTURE_MISSING]).await.unwrap_err();
    assert!(matches!(err, OracleError::LogNotFound { .. }));
    Ok(())
}
