//! Error types for batch verification.

use reclaim_oracle::OracleError;
use std::fmt;

/// Result type alias for verification operations.
pub type VerifyResult<T, E = VerifyError> = Result<T, E>;

/// The claim field that diverged from the reference record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimField {
    /// The token contract that emitted the log.
    TokenContract,
    /// The transfer sender.
    From,
    /// The transfer recipient.
    To,
}

impl fmt::Display for ClaimField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenContract => write!(f, "token contract"),
            Self::From => write!(f, "sender"),
            Self::To => write!(f, "recipient"),
        }
    }
}

/// Error type for batch verification.
///
/// Every variant is terminal: the pipeline aborts on the first failure and
/// never publishes a partial aggregate.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// A coordinate column does not hold exactly one entry per slot.
    #[error("column {column} has {len} entries, expected {expected}")]
    InvalidBatchShape {
        /// Name of the offending column.
        column: &'static str,
        /// Observed entry count.
        len: usize,
        /// The configured batch capacity.
        expected: usize,
    },

    /// The declared claim count is zero or exceeds the batch capacity.
    #[error("claim count {num_claims} outside 1..={max}")]
    ClaimCountOutOfRange {
        /// The declared number of active claims.
        num_claims: u64,
        /// The configured batch capacity.
        max: usize,
    },

    /// Adjacent claim identifiers are not strictly ascending.
    ///
    /// Covers both duplicate and out-of-order claims; the identifiers at the
    /// reported slots compare equal or inverted.
    #[error("claim at slot {index} does not ascend from slot {prev_index}")]
    DuplicateOrUnorderedClaim {
        /// Slot of the earlier identifier in the pair.
        prev_index: usize,
        /// Slot of the offending identifier.
        index: usize,
    },

    /// The oracle failed to resolve an active claim's log coordinate.
    #[error("log resolution failed: {0}")]
    LogResolution(#[from] OracleError),

    /// An active claim's resolved record diverges from the reference record.
    #[error("claim at slot {index} has a different {field} than slot 0")]
    InconsistentClaimSource {
        /// The offending slot.
        index: usize,
        /// The field that diverged.
        field: ClaimField,
    },
}
