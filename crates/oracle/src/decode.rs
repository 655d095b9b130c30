//! Decoding of raw logs under the ERC-20 `Transfer` schema.

use crate::{OracleError, OracleResult};
use alloy::primitives::{Address, Log, U256};
use reclaim_types::{EventLogRecord, LogCoordinate, TRANSFER_EVENT_SIGNATURE};

/// Decode a raw log as an ERC-20 `Transfer(address indexed from, address
/// indexed to, uint256 value)` event.
///
/// Layout enforced:
/// - `topic0` equals [`TRANSFER_EVENT_SIGNATURE`]
/// - `topic1` is the sender, `topic2` the recipient (address in the low 20
///   bytes of the 32-byte word)
/// - the first 32-byte data word is the transferred value
///
/// # Errors
///
/// Returns [`OracleError::SchemaMismatch`] naming the violated part of the
/// layout. The coordinate is carried for diagnostics only.
pub fn decode_transfer(coordinate: LogCoordinate, log: &Log) -> OracleResult<EventLogRecord> {
    let topics = log.topics();

    match topics.first() {
        Some(sig) if *sig == TRANSFER_EVENT_SIGNATURE => {}
        Some(_) => {
            return Err(OracleError::SchemaMismatch {
                coordinate,
                reason: "topic0 is not the Transfer event signature",
            });
        }
        None => {
            return Err(OracleError::SchemaMismatch {
                coordinate,
                reason: "log has no topics",
            });
        }
    }

    let [from, to] = match topics {
        [_, from, to] => [from, to],
        _ => {
            return Err(OracleError::SchemaMismatch {
                coordinate,
                reason: "expected exactly two indexed address topics",
            });
        }
    };

    let data = log.data.data.as_ref();
    if data.len() < 32 {
        return Err(OracleError::SchemaMismatch {
            coordinate,
            reason: "data is shorter than one 32-byte value word",
        });
    }
    let value = U256::from_be_slice(&data[..32]);

    Ok(EventLogRecord::new(
        log.address,
        Address::from_word(*from),
        Address::from_word(*to),
        value,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{B256, Bytes, LogData};

    fn transfer_log(token: Address, from: Address, to: Address, value: U256) -> Log {
        Log {
            address: token,
            data: LogData::new_unchecked(
                vec![TRANSFER_EVENT_SIGNATURE, from.into_word(), to.into_word()],
                Bytes::from(value.to_be_bytes::<32>()),
            ),
        }
    }

    fn coord() -> LogCoordinate {
        LogCoordinate::new(100, 1, 0)
    }

    #[test]
    fn decode_valid_transfer() {
        let token = Address::repeat_byte(0xAA);
        let from = Address::repeat_byte(0x01);
        let to = Address::repeat_byte(0x02);
        let value = U256::from(1_000_000u64);

        let record = decode_transfer(coord(), &transfer_log(token, from, to, value)).unwrap();
        assert_eq!(record, EventLogRecord::new(token, from, to, value));
    }

    #[test]
    fn decode_rejects_wrong_signature() {
        let mut log = transfer_log(
            Address::repeat_byte(0xAA),
            Address::repeat_byte(0x01),
            Address::repeat_byte(0x02),
            U256::from(1u64),
        );
        let mut topics = log.data.topics().to_vec();
        topics[0] = B256::repeat_byte(0xFF);
        log.data = LogData::new_unchecked(topics, log.data.data.clone());

        let err = decode_transfer(coord(), &log).unwrap_err();
        assert!(matches!(err, OracleError::SchemaMismatch { .. }));
    }

    #[test]
    fn decode_rejects_missing_topics() {
        let log = Log {
            address: Address::repeat_byte(0xAA),
            data: LogData::new_unchecked(
                vec![TRANSFER_EVENT_SIGNATURE],
                Bytes::from(U256::from(1u64).to_be_bytes::<32>()),
            ),
        };
        let err = decode_transfer(coord(), &log).unwrap_err();
        assert!(matches!(err, OracleError::SchemaMismatch { .. }));
    }

    #[test]
    fn decode_rejects_short_data() {
        let log = Log {
            address: Address::repeat_byte(0xAA),
            data: LogData::new_unchecked(
                vec![
                    TRANSFER_EVENT_SIGNATURE,
                    Address::repeat_byte(0x01).into_word(),
                    Address::repeat_byte(0x02).into_word(),
                ],
                Bytes::from(vec![0u8; 16]),
            ),
        };
        let err = decode_transfer(coord(), &log).unwrap_err();
        assert!(matches!(err, OracleError::SchemaMismatch { .. }));
    }

    #[test]
    fn decode_rejects_empty_log() {
        let log = Log {
            address: Address::repeat_byte(0xAA),
            data: LogData::new_unchecked(vec![], Bytes::new()),
        };
        let err = decode_transfer(coord(), &log).unwrap_err();
        assert!(matches!(err, OracleError::SchemaMismatch { .. }));
    }
}
