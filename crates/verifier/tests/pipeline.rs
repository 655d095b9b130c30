//! Integration tests for [`BatchVerifier`] against an in-memory oracle.

use alloy::primitives::{Address, U256};
use reclaim_oracle::{OracleTask, mem::MemLogOracle};
use reclaim_verifier::{
    BatchCapacity, BatchVerifier, CancellationToken, ClaimBatch, ClaimField, ClaimId,
    LogCoordinate, OracleError, VerifyError,
};

const TOKEN: Address = Address::repeat_byte(0xC0);
const SENDER: Address = Address::repeat_byte(0xA1);
const RECIPIENT: Address = Address::repeat_byte(0xB2);

/// Spawn a verifier over a freshly seeded in-memory oracle.
async fn make_verifier(
    transfers: &[(LogCoordinate, u64)],
    cancel: &CancellationToken,
) -> BatchVerifier {
    let backend = MemLogOracle::new();
    for (coordinate, value) in transfers {
        backend.insert_transfer(*coordinate, TOKEN, SENDER, RECIPIENT, U256::from(*value)).await;
    }
    let handle = OracleTask::spawn(backend, cancel.clone());
    BatchVerifier::new(handle, BatchCapacity::default())
}

/// Build a 10-slot batch from the given coordinates, padded with zeros.
fn make_batch(coordinates: &[LogCoordinate]) -> ClaimBatch {
    let mut block_numbers = vec![0; 10];
    let mut tx_idxs = vec![0; 10];
    let mut log_idxs = vec![0; 10];
    for (slot, coordinate) in coordinates.iter().enumerate() {
        block_numbers[slot] = coordinate.block;
        tx_idxs[slot] = coordinate.tx_index;
        log_idxs[slot] = coordinate.log_index;
    }
    ClaimBatch::new(coordinates.len() as u64, block_numbers, tx_idxs, log_idxs)
}

#[tokio::test]
async fn single_claim_batch() {
    let coordinate = LogCoordinate::new(5141305, 44, 0);
    let cancel = CancellationToken::new();
    let verifier = make_verifier(&[(coordinate, 12345)], &cancel).await;

    let result = verifier.verify(&make_batch(&[coordinate])).await.unwrap();

    let id = ClaimId::pack(coordinate);
    assert_eq!(
        result.into_tuple(),
        (SENDER, RECIPIENT, U256::from(12345u64), TOKEN, id, id)
    );

    cancel.cancel();
}

#[tokio::test]
async fn multiple_claims_sum_and_bracket() {
    let coordinates = [
        LogCoordinate::new(100, 0, 0),
        LogCoordinate::new(100, 0, 3),
        LogCoordinate::new(250, 7, 1),
    ];
    let cancel = CancellationToken::new();
    let verifier =
        make_verifier(&[(coordinates[0], 10), (coordinates[1], 20), (coordinates[2], 30)], &cancel)
            .await;

    let result = verifier.verify(&make_batch(&coordinates)).await.unwrap();

    assert_eq!(result.total_value, U256::from(60u64));
    assert_eq!(result.token_contract, TOKEN);
    assert_eq!(result.first_claim_id, ClaimId::pack(coordinates[0]));
    assert_eq!(result.last_claim_id, ClaimId::pack(coordinates[2]));

    cancel.cancel();
}

#[tokio::test]
async fn duplicate_claim_rejected() {
    let coordinate = LogCoordinate::new(100, 0, 0);
    let cancel = CancellationToken::new();
    let verifier = make_verifier(&[(coordinate, 10)], &cancel).await;

    let err = verifier.verify(&make_batch(&[coordinate, coordinate])).await.unwrap_err();
    assert!(matches!(err, VerifyError::DuplicateOrUnorderedClaim { prev_index: 0, index: 1 }));

    cancel.cancel();
}

#[tokio::test]
async fn out_of_order_claims_rejected() {
    let earlier = LogCoordinate::new(100, 0, 0);
    let later = LogCoordinate::new(200, 0, 0);
    let cancel = CancellationToken::new();
    let verifier = make_verifier(&[(earlier, 10), (later, 20)], &cancel).await;

    let err = verifier.verify(&make_batch(&[later, earlier])).await.unwrap_err();
    assert!(matches!(err, VerifyError::DuplicateOrUnorderedClaim { prev_index: 0, index: 1 }));

    cancel.cancel();
}

#[tokio::test]
async fn divergent_token_contract_rejected() {
    let matching = LogCoordinate::new(100, 0, 0);
    let divergent = LogCoordinate::new(100, 1, 0);
    let cancel = CancellationToken::new();

    let backend = MemLogOracle::new();
    backend.insert_transfer(matching, TOKEN, SENDER, RECIPIENT, U256::from(10u64)).await;
    backend
        .insert_transfer(divergent, Address::repeat_byte(0xDD), SENDER, RECIPIENT, U256::from(10u64))
        .await;
    let handle = OracleTask::spawn(backend, cancel.clone());
    let verifier = BatchVerifier::new(handle, BatchCapacity::default());

    let err = verifier.verify(&make_batch(&[matching, divergent])).await.unwrap_err();
    assert!(matches!(
        err,
        VerifyError::InconsistentClaimSource { index: 1, field: ClaimField::TokenContract }
    ));

    cancel.cancel();
}

#[tokio::test]
async fn claim_count_checked_before_lookups() {
    let cancel = CancellationToken::new();
    // Empty oracle: any lookup would fail, so reaching the oracle at all
    // would surface as a different error.
    let verifier = make_verifier(&[], &cancel).await;

    let mut batch = make_batch(&[LogCoordinate::new(100, 0, 0)]);
    batch.num_claims = 11;

    let err = verifier.verify(&batch).await.unwrap_err();
    assert!(matches!(err, VerifyError::ClaimCountOutOfRange { num_claims: 11, max: 10 }));

    cancel.cancel();
}

#[tokio::test]
async fn short_column_rejected() {
    let cancel = CancellationToken::new();
    let verifier = make_verifier(&[], &cancel).await;

    let mut batch = make_batch(&[LogCoordinate::new(100, 0, 0)]);
    batch.tx_idxs.pop();

    let err = verifier.verify(&batch).await.unwrap_err();
    assert!(matches!(
        err,
        VerifyError::InvalidBatchShape { column: "tx_idxs", len: 9, expected: 10 }
    ));

    cancel.cancel();
}

#[tokio::test]
async fn unresolvable_claim_aborts_run() {
    let resolvable = LogCoordinate::new(100, 0, 0);
    let missing = LogCoordinate::new(100, 1, 0);
    let cancel = CancellationToken::new();
    let verifier = make_verifier(&[(resolvable, 10)], &cancel).await;

    let err = verifier.verify(&make_batch(&[resolvable, missing])).await.unwrap_err();
    assert!(matches!(err, VerifyError::LogResolution(OracleError::LogNotFound { .. })));

    cancel.cancel();
}

#[tokio::test]
async fn padding_garbage_never_affects_result() {
    let coordinate = LogCoordinate::new(100, 0, 0);
    let cancel = CancellationToken::new();
    let verifier = make_verifier(&[(coordinate, 10)], &cancel).await;

    // Same single active claim, garbage in every padding column entry.
    let mut batch = make_batch(&[coordinate]);
    for slot in 1..10 {
        batch.block_numbers[slot] = u64::MAX;
        batch.tx_idxs[slot] = u64::MAX;
        batch.log_idxs[slot] = u64::MAX;
    }

    let result = verifier.verify(&batch).await.unwrap();
    let clean = verifier.verify(&make_batch(&[coordinate])).await.unwrap();
    assert_eq!(result, clean);

    cancel.cancel();
}

#[tokio::test]
async fn full_capacity_batch() {
    let coordinates: Vec<_> = (0..10).map(|i| LogCoordinate::new(1000 + i, 0, 0)).collect();
    let transfers: Vec<_> = coordinates.iter().map(|c| (*c, 5u64)).collect();
    let cancel = CancellationToken::new();
    let verifier = make_verifier(&transfers, &cancel).await;

    let result = verifier.verify(&make_batch(&coordinates)).await.unwrap();

    assert_eq!(result.total_value, U256::from(50u64));
    assert_eq!(result.first_claim_id, ClaimId::pack(coordinates[0]));
    assert_eq!(result.last_claim_id, ClaimId::pack(coordinates[9]));

    cancel.cancel();
}

#[tokio::test]
async fn custom_capacity_round_trip() {
    let coordinates = [LogCoordinate::new(1, 0, 0), LogCoordinate::new(2, 0, 0)];
    let cancel = CancellationToken::new();

    let backend = MemLogOracle::new();
    for coordinate in &coordinates {
        backend.insert_transfer(*coordinate, TOKEN, SENDER, RECIPIENT, U256::from(1u64)).await;
    }
    let handle = OracleTask::spawn(backend, cancel.clone());
    let verifier = BatchVerifier::new(handle, BatchCapacity::new(2).unwrap());

    let batch = ClaimBatch::new(2, vec![1, 2], vec![0, 0], vec![0, 0]);
    let result = verifier.verify(&batch).await.unwrap();
    assert_eq!(result.total_value, U256::from(2u64));

    // A 10-slot batch no longer fits this verifier.
    let err = verifier.verify(&make_batch(&coordinates)).await.unwrap_err();
    assert!(matches!(err, VerifyError::InvalidBatchShape { .. }));

    cancel.cancel();
}
