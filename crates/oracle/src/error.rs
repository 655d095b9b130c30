//! Error types for oracle operations.

use reclaim_types::LogCoordinate;

/// Result type alias for oracle operations.
pub type OracleResult<T, E = OracleError> = Result<T, E>;

/// Error type for oracle operations.
///
/// Every variant is terminal for the verification run that triggered the
/// lookup: the oracle does not retry, and the pipeline treats any resolution
/// failure as fatal.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// No log exists at the referenced coordinate.
    #[error("no log at block {} tx {} log {}", .coordinate.block, .coordinate.tx_index, .coordinate.log_index)]
    LogNotFound {
        /// The coordinate that failed to resolve.
        coordinate: LogCoordinate,
    },

    /// The log exists but does not decode under the ERC-20 `Transfer` schema.
    #[error(
        "log at block {} tx {} log {} is not an ERC-20 Transfer: {reason}",
        .coordinate.block, .coordinate.tx_index, .coordinate.log_index
    )]
    SchemaMismatch {
        /// The coordinate of the offending log.
        coordinate: LogCoordinate,
        /// What part of the `Transfer` layout was violated.
        reason: &'static str,
    },

    /// An error occurred in the oracle backend.
    #[error("backend error: {0}")]
    Backend(#[from] Box<dyn core::error::Error + Send + Sync + 'static>),

    /// The oracle task was cancelled before responding.
    #[error("oracle task cancelled")]
    Cancelled,

    /// Failed to send a request to the oracle task.
    ///
    /// Either the request channel is full (the task cannot keep up with
    /// incoming lookups) or it is closed because the task has terminated.
    /// Callers cannot distinguish the two from the error alone.
    #[error("failed to send request to oracle task")]
    SendFailed,
}

impl OracleError {
    /// Create a new backend error from any error type.
    pub fn backend<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(error))
    }
}
